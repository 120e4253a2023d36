//! Presentation forms, pinned with inline snapshots.

#![cfg(feature = "all")]

use idnum::core::IdentifierKind;

fn presentations(samples: &[(IdentifierKind, &str)]) -> String {
    samples
        .iter()
        .map(|(kind, number)| format!("{kind}: {}", kind.format(number)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn americas_presentation() {
    let out = presentations(&[
        (IdentifierKind::ArCuit, "20267565393"),
        (IdentifierKind::BrCnpj, "16727230000197"),
        (IdentifierKind::BrCpf, "39053344705"),
        (IdentifierKind::ClRut, "125319092"),
        (IdentifierKind::CoNit, "2131234321"),
        (IdentifierKind::PyRuc, "800280610"),
        (IdentifierKind::UsEin, "042103594"),
        (IdentifierKind::UsSsn, "536904399"),
        (IdentifierKind::UsTin, "042103594"),
        (IdentifierKind::VeRif, "V114702834"),
    ]);
    insta::assert_snapshot!(out, @r"
    ar.cuit: 20-26756539-3
    br.cnpj: 16.727.230/0001-97
    br.cpf: 390.533.447-05
    cl.rut: 12.531.909-2
    co.nit: 213.123.432-1
    py.ruc: 80028061-0
    us.ein: 04-2103594
    us.ssn: 536-90-4399
    us.tin: 042-10-3594
    ve.rif: V-11470283-4
    ");
}

#[test]
fn europe_presentation() {
    let out = presentations(&[
        (IdentifierKind::AdNrt, "U132950X"),
        (IdentifierKind::AlNipt, "al j91402501l"),
        (IdentifierKind::FiAssociationId, "1234"),
        (IdentifierKind::GbNhs, "9434765919"),
        (IdentifierKind::NlBsn, "111222333"),
        (IdentifierKind::PtCc, "000000000ZZ4"),
        (IdentifierKind::RoCui, "RO18547290"),
    ]);
    insta::assert_snapshot!(out, @r"
    ad.nrt: U-132950-X
    al.nipt: J91402501L
    fi.associationid: 1.234
    gb.nhs: 943 476 5919
    nl.bsn: 1112.22.333
    pt.cc: 00000000 0 ZZ4
    ro.cui: 18547290
    ");
}

#[test]
fn asia_presentation() {
    let out = presentations(&[
        (IdentifierKind::IdNpwp, "013000666091000"),
        (IdentifierKind::IdNpwp, "3171011512800001"),
        (IdentifierKind::ThMoa, "0993000133978"),
        (IdentifierKind::ThPin, "7100600445635"),
        (IdentifierKind::TwUbn, "00501503"),
    ]);
    insta::assert_snapshot!(out, @r"
    id.npwp: 01.300.066.6-091.000
    id.npwp: 3171011512800001
    th.moa: 0-99-3-000-13397-8
    th.pin: 7-1006-00445-63-5
    tw.ubn: 00501503
    ");
}
