use recruit_ops::workflows::intake::{normalize_phone_number, parse_firm_lines, PhoneError};

#[test]
fn phone_numbers_normalize_to_e164() {
    assert_eq!(
        normalize_phone_number("2028347778").map(|phone| phone.e164),
        Ok("+12028347778".to_string())
    );
    assert_eq!(
        normalize_phone_number(" 1 (202) 834-7778 ").map(|phone| phone.e164),
        Ok("+12028347778".to_string())
    );
    assert_eq!(
        normalize_phone_number("+44 20 7946 0958").map(|phone| phone.e164),
        Ok("+442079460958".to_string())
    );
    assert!(normalize_phone_number("abc").is_err());
    assert_eq!(normalize_phone_number(""), Err(PhoneError::Empty));
}

#[test]
fn firm_lines_keep_order_and_drop_blanks() {
    let names: Vec<String> = parse_firm_lines("  Firm A  \n\nFirm B\n")
        .into_iter()
        .map(|firm| firm.name)
        .collect();
    assert_eq!(names, vec!["Firm A", "Firm B"]);
}
