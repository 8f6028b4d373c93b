// Table tests for MM/DD/YYYY text handling

use blackout_date_picker::models::date_input::{DateFields, DateInput};
use blackout_date_picker::utils::date::{format_date_parts, is_valid_date_text, parse_date_text};
use test_case::test_case;

#[test_case("03/16/2023" ; "zero padded")]
#[test_case("3/16/2023" ; "single digit month")]
#[test_case("2/5/2023" ; "single digit month and day")]
#[test_case("12/31/9999" ; "upper bounds")]
#[test_case("01/01/0000" ; "year zero")]
#[test_case("02/29/2024" ; "leap day")]
#[test_case("02/30/2023" ; "impossible day passes pattern")]
#[test_case("04/31/2023" ; "thirty first of april passes pattern")]
fn test_accepts(text: &str) {
    assert!(is_valid_date_text(text), "'{}' should match", text);
}

#[test_case("13/01/2023" ; "month thirteen")]
#[test_case("00/01/2023" ; "month zero")]
#[test_case("01/32/2023" ; "day thirty two")]
#[test_case("01/00/2023" ; "day zero")]
#[test_case("1/1/23" ; "two digit year")]
#[test_case("1/1/02023" ; "five digit year")]
#[test_case("001/01/2023" ; "three digit month")]
#[test_case("2023-03-16" ; "iso format")]
#[test_case("03-16-2023" ; "dash separators")]
#[test_case("03/16/2023 " ; "trailing space")]
#[test_case("" ; "empty")]
#[test_case("03/16/" ; "missing year")]
#[test_case("a3/16/2023" ; "letter in month")]
#[test_case("03/16/２０２３" ; "non ascii digits")]
fn test_rejects(text: &str) {
    assert!(!is_valid_date_text(text), "'{}' should not match", text);
}

#[test_case("5/9/2023", 5, 9, 2023)]
#[test_case("11/30/1999", 11, 30, 1999)]
#[test_case("02/30/2023", 2, 30, 2023)]
fn test_parse_fields(text: &str, month: u32, day: u32, year: i32) {
    assert_eq!(
        parse_date_text(text),
        DateInput::Valid(DateFields { month, day, year })
    );
}

#[test_case(3, 16, 2023, "03/16/2023")]
#[test_case(12, 1, 2024, "12/01/2024")]
#[test_case(2, 30, 2023, "02/30/2023")]
fn test_format_parts(month: u32, day: u32, year: i32, expected: &str) {
    assert_eq!(format_date_parts(month, day, year), expected);
}
