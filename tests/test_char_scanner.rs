use treemaker::parser::CharScanner;
use treemaker::parser::char_scanner::is_whitespace;

#[test]
fn test_skip_whitespace() {
    let mut scanner = CharScanner::from_str(" \r  \t\n \t x y");
    scanner.skip_whitespace();
    assert_eq!(scanner.peek(), Some('x'));

    scanner.next_char(); // skip x
    scanner.skip_whitespace();
    assert_eq!(scanner.peek(), Some('y'));
    assert!(!is_whitespace('y'));
}

#[test]
fn test_consume_if() {
    let mut scanner = CharScanner::from_str("(A)");
    assert!(!scanner.consume_if(')'));
    assert!(scanner.consume_if('('));
    assert_eq!(scanner.peek(), Some('A'));
    assert_eq!(scanner.position(), 1);
}

#[test]
fn test_consume_while() {
    let mut scanner = CharScanner::from_str("Kea-1 Kaka");
    let label = scanner.consume_while(|c| c.is_alphanumeric() || c == '-');
    assert_eq!(label, "Kea-1");
    assert_eq!(scanner.position(), 5);

    // Nothing matches, nothing consumed
    assert_eq!(scanner.consume_while(|c| c.is_alphanumeric()), "");
    assert_eq!(scanner.position(), 5);
}

#[test]
fn test_consume_until() {
    let mut scanner = CharScanner::from_str("consume a CAN of beans");
    assert_eq!(scanner.consume_until('C'), Some("consume a ".to_string()));
    assert_eq!(scanner.peek(), Some('A'));
    assert_eq!(scanner.position(), 11);

    assert_eq!(scanner.consume_until('@'), None);
    assert!(scanner.is_eof());
    assert_eq!(scanner.next_char(), None);
}

#[test]
fn test_positions_count_chars() {
    let mut scanner = CharScanner::from_str("Kākāpō(x)");
    scanner.consume_while(|c| c.is_alphanumeric());
    assert_eq!(scanner.position(), 6);
    assert_eq!(scanner.peek(), Some('('));
}

#[test]
fn test_get_context_at() {
    let scanner = CharScanner::from_str("A(B C)");
    assert_eq!(scanner.get_context_at(2, 3), "B C");
    assert_eq!(scanner.get_context_at(4, 10), "C)");
    assert_eq!(scanner.get_context_at(42, 3), "");
}
