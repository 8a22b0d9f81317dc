use super::{Dialect,NameTableLocator};
use super::settings::parse;

#[test]
fn empty_object() {
    let dialect = parse("{}",Dialect::qb()).expect("parse failed");
    assert_eq!(dialect.name_code_limit,0x20);
    assert_eq!(dialect.terminator,0x0d);
    assert_eq!(dialect.extended_leads,vec![0xfe,0xff]);
    assert!(dialect.scan_for_first_record);
    assert!(dialect.scan_after_chain);
    assert!(dialect.name_table.is_some());
}

#[test]
fn single_chain() {
    let dialect = parse(r#"{"scanAfterChain": false}"#,Dialect::qb()).expect("parse failed");
    assert!(!dialect.scan_after_chain);
    let buf = hex::decode("00000A00910DEEEE0F00140081410D00001E00810D").expect("hex error");
    assert_eq!(crate::decode_with(&buf,&dialect).len(),1);
}

#[test]
fn all_keys() {
    let json = r#"{
        "nameCodeLimit": 16,
        "terminator": 10,
        "extendedLeads": [253],
        "scanForFirstRecord": false,
        "scanAfterChain": true,
        "nameTable": { "marker": [1,2], "minOffset": 64 }
    }"#;
    let dialect = parse(json,Dialect::gw()).expect("parse failed");
    assert_eq!(dialect.name_code_limit,16);
    assert_eq!(dialect.terminator,10);
    assert_eq!(dialect.extended_leads,vec![0xfd]);
    assert!(!dialect.scan_for_first_record);
    assert!(dialect.scan_after_chain);
    assert_eq!(dialect.name_table,Some(NameTableLocator { marker: [1,2], min_offset: 64 }));
}

#[test]
fn partial_name_table() {
    let dialect = parse(r#"{"nameTable": {"minOffset": 512}}"#,Dialect::qb()).expect("parse failed");
    assert_eq!(dialect.name_table,Some(NameTableLocator { marker: [0,2], min_offset: 512 }));
}

#[test]
fn name_table_off() {
    let dialect = parse(r#"{"nameTable": null}"#,Dialect::qb()).expect("parse failed");
    assert_eq!(dialect.name_table,None);
}

#[test]
fn limit_clamped() {
    let dialect = parse(r#"{"nameCodeLimit": 100}"#,Dialect::qb()).expect("parse failed");
    assert_eq!(dialect.name_code_limit,0x20);
}

#[test]
fn wrong_types_ignored() {
    let json = r#"{
        "nameCodeLimit": "many",
        "terminator": 0,
        "extendedLeads": [254,12],
        "scanForFirstRecord": 1,
        "nameTable": { "marker": [0] },
        "colors": true
    }"#;
    let dialect = parse(json,Dialect::qb()).expect("parse failed");
    assert_eq!(dialect.name_code_limit,0x20);
    assert_eq!(dialect.terminator,0x0d);
    assert_eq!(dialect.extended_leads,vec![0xfe,0xff]);
    assert!(dialect.scan_for_first_record);
    assert_eq!(dialect.name_table,Some(NameTableLocator { marker: [0,2], min_offset: 0x100 }));
}

#[test]
fn not_an_object() {
    assert!(parse("[1,2]",Dialect::gw()).is_err());
    assert!(parse("13",Dialect::gw()).is_err());
}

#[test]
fn invalid_json() {
    assert!(parse("{\"terminator\": ",Dialect::gw()).is_err());
    assert!(parse("",Dialect::gw()).is_err());
}

#[test]
fn alternate_terminator() {
    let dialect = parse(r#"{"terminator": 10}"#,Dialect::gw()).expect("parse failed");
    let buf = hex::decode("00000A0091410A41").expect("hex error");
    let lines = crate::decode_with(&buf,&dialect);
    assert_eq!(lines[0].to_string(),"10 PRINT A");
}
