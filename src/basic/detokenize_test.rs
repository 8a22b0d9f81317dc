#[cfg(test)]
use super::Dialect;
#[cfg(test)]
use super::detokenizer::{Detokenizer,listing_to_string};
#[cfg(test)]
use super::names::NameTable;
#[cfg(test)]
use hex;

#[cfg(test)]
fn test_detokenizer(hex_tokens: &str, expected: &str) {
    let tokens = hex::decode(hex_tokens).expect("hex error");
    let actual = listing_to_string(&crate::decode(&tokens));
    assert_eq!(actual,expected);
}

/// decode a bare payload, without any record structure
#[cfg(test)]
fn test_payload(dialect: &Dialect, names: &NameTable, hex_payload: &str, expected: &str) {
    let payload = hex::decode(hex_payload).expect("hex error");
    let detokenizer = Detokenizer::new(dialect);
    let actual = detokenizer.decode_line(&payload,0,payload.len(),names);
    assert_eq!(actual,expected);
}

mod programs {
    #[test]
    fn print_string() {
        // admin word at 0 points at its own end, the real record is found at offset 2
        let expected = "10 PRINT \"HI\"\n";
        let tokens = "040000000A009120224849220D";
        super::test_detokenizer(tokens, expected);
    }
    #[test]
    fn multi_line() {
        let expected = "10 PRINT A\n20 END\n";
        let tokens = "07000A0091410D00001400810D";
        super::test_detokenizer(tokens, expected);
    }
    #[test]
    fn header_block() {
        let expected = "10 PRINT A\n20 END\n";
        let tokens = "08000000EEEEEEEE0F000A0091410D00001400810D";
        super::test_detokenizer(tokens, expected);
    }
    #[test]
    fn empty_payload() {
        let expected = "10\n";
        let tokens = "00000A000D";
        super::test_detokenizer(tokens, expected);
    }
    #[test]
    fn nothing_found() {
        super::test_detokenizer("", "");
        super::test_detokenizer("000000", "");
        super::test_detokenizer("00000000", "");
    }
    #[test]
    fn deterministic() {
        let tokens = hex::decode("08000000EEEEEEEE0F000A0091410D00001400810D").expect("hex error");
        assert_eq!(crate::decode(&tokens),crate::decode(&tokens));
    }
}

mod single_byte_tokens {
    use super::super::{Dialect,TokenTable};
    use super::super::detokenizer::Detokenizer;
    use super::super::names::NameTable;
    fn every_token(dialect: &Dialect, table: &TokenTable) {
        let detokenizer = Detokenizer::new(dialect);
        for (b,keyword) in table.single {
            let payload = [*b,0x0d];
            assert_eq!(detokenizer.decode_line(&payload,0,2,&NameTable::new()),*keyword);
        }
    }
    fn every_gap(dialect: &Dialect) {
        let detokenizer = Detokenizer::new(dialect);
        for b in 0x81..=0xff {
            if dialect.is_extended_lead(b) || detokenizer.lookup_single(b).is_some() {
                continue;
            }
            let payload = [b,0x0d];
            let actual = detokenizer.decode_line(&payload,0,2,&NameTable::new());
            assert_eq!(actual,format!("<0x{:02X}>",b));
        }
    }
    #[test]
    fn gw_keywords() {
        let dialect = Dialect::gw();
        every_token(&dialect, dialect.tokens);
    }
    #[test]
    fn qb_keywords() {
        let dialect = Dialect::qb();
        every_token(&dialect, dialect.tokens);
    }
    #[test]
    fn gw_gaps() {
        every_gap(&Dialect::gw());
    }
    #[test]
    fn qb_gaps() {
        every_gap(&Dialect::qb());
    }
    #[test]
    fn keywords_are_not_empty() {
        for dialect in [Dialect::gw(),Dialect::qb()] {
            assert!(dialect.tokens.single.iter().all(|(_,s)| s.len() > 0));
            assert!(dialect.tokens.extended.iter().all(|(_,s)| s.len() > 0));
        }
    }
}

mod extended_tokens {
    use super::super::Dialect;
    use super::super::names::NameTable;
    #[test]
    fn gw_known() {
        super::test_payload(&Dialect::gw(), &NameTable::new(), "FD81", "CVI");
        super::test_payload(&Dialect::gw(), &NameTable::new(), "FF8B", "EXP");
    }
    #[test]
    fn qb_known() {
        super::test_payload(&Dialect::qb(), &NameTable::new(), "41FF0342", "A MOD B");
        super::test_payload(&Dialect::qb(), &NameTable::new(), "FF6C", "TIMER");
    }
    #[test]
    fn unknown_pair() {
        super::test_payload(&Dialect::gw(), &NameTable::new(), "FD90", "<0xFD 90>");
        super::test_payload(&Dialect::gw(), &NameTable::new(), "FE01", "<0xFE 01>");
    }
    #[test]
    fn second_byte_is_consumed() {
        // the terminator value right after a lead byte belongs to the pair
        super::test_payload(&Dialect::gw(), &NameTable::new(), "FE0D41", "<0xFE 0D> A");
    }
    #[test]
    fn lead_at_end() {
        super::test_payload(&Dialect::gw(), &NameTable::new(), "91FF", "PRINT <0xFF>");
    }
}

mod name_codes {
    use super::super::Dialect;
    use super::super::names::NameTable;
    #[test]
    fn resolved() {
        let names = NameTable::from_names(&["","X","Y","COUNTER"]);
        super::test_payload(&Dialect::qb(), &names, "030D", "COUNTER");
        super::test_payload(&Dialect::qb(), &names, "91010D", "PRINT X");
    }
    #[test]
    fn out_of_range() {
        let names = NameTable::from_names(&["","X","Y","COUNTER"]);
        super::test_payload(&Dialect::qb(), &names, "090D", "<0x09>");
    }
    #[test]
    fn reserved_entry_is_not_a_name() {
        let names = NameTable::from_names(&["","X"]);
        super::test_payload(&Dialect::qb(), &names, "0041", "A");
    }
    #[test]
    fn no_table() {
        super::test_payload(&Dialect::qb(), &NameTable::new(), "03", "<0x03>");
    }
    #[test]
    fn not_in_dialect() {
        let names = NameTable::from_names(&["","X","Y","COUNTER"]);
        super::test_payload(&Dialect::gw(), &names, "03", "<0x03>");
    }
    #[test]
    fn lowered_limit() {
        let names = NameTable::from_names(&["","X","Y","COUNTER"]);
        let mut dialect = Dialect::qb();
        dialect.name_code_limit = 3;
        super::test_payload(&dialect, &names, "0203", "Y <0x03>");
    }
}

mod spacing {
    use super::super::Dialect;
    use super::super::names::NameTable;
    #[test]
    fn keywords_and_text() {
        super::test_payload(&Dialect::gw(), &NameTable::new(), "8B58C691", "IF X THEN PRINT");
        super::test_payload(&Dialect::gw(), &NameTable::new(), "9120224849220D", "PRINT \"HI\"");
    }
    #[test]
    fn open_parenthesis() {
        super::test_payload(&Dialect::gw(), &NameTable::new(), "91C73529", "PRINT TAB(5)");
    }
    #[test]
    fn operators_and_punctuation() {
        super::test_payload(&Dialect::gw(), &NameTable::new(), "583DE028412429", "X=LEN(A$)");
        super::test_payload(&Dialect::gw(), &NameTable::new(), "91413BC73529", "PRINT A;TAB(5)");
        super::test_payload(&Dialect::gw(), &NameTable::new(), "41E0283129", "A LEN(1)");
    }
    #[test]
    fn trimmed() {
        super::test_payload(&Dialect::gw(), &NameTable::new(), "20209120200D", "PRINT");
    }
    #[test]
    fn nulls_are_inert() {
        super::test_payload(&Dialect::gw(), &NameTable::new(), "00910000", "PRINT");
        super::test_payload(&Dialect::gw(), &NameTable::new(), "410042", "A B");
    }
}

mod escapes {
    use super::super::Dialect;
    use super::super::detokenizer::Detokenizer;
    use super::super::names::NameTable;
    #[test]
    fn control_and_high_bytes() {
        super::test_payload(&Dialect::gw(), &NameTable::new(), "0741", "<0x07> A");
        super::test_payload(&Dialect::gw(), &NameTable::new(), "7F80", "<0x7F> <0x80>");
    }
    #[test]
    fn terminator_stops() {
        super::test_payload(&Dialect::gw(), &NameTable::new(), "91410D9141", "PRINT A");
    }
    #[test]
    fn count() {
        let dialect = Dialect::gw();
        let detokenizer = Detokenizer::new(&dialect);
        let payload = hex::decode("07EEFD904191").expect("hex error");
        detokenizer.decode_line(&payload,0,payload.len(),&NameTable::new());
        assert_eq!(detokenizer.escape_count(),3);
    }
    #[test]
    fn span_clamped() {
        let dialect = Dialect::gw();
        let detokenizer = Detokenizer::new(&dialect);
        let payload = [0x91,0x41];
        assert_eq!(detokenizer.decode_line(&payload,0,100,&NameTable::new()),"PRINT A");
        assert_eq!(detokenizer.decode_line(&payload,5,100,&NameTable::new()),"");
    }
}
