use std::path::Path;

use super::*;

fn file(name: &str) -> FileId {
    FileId::from_path(&Path::new("/work").join(name))
}

fn element_at(
    source: &str,
    name: &str,
    offset: usize,
) -> Element {
    SyntaxTree::parse(source).find_element_at(&file(name), offset).unwrap()
}

#[test]
fn identifier_referent_is_reference_node() {
    let ident = element_at("Alpha := 1;", "a.adb", 2);
    assert_eq!(ident.kind(), SyntaxKind::Ident);

    let referent = ident.referent();
    assert_eq!(referent.kind(), SyntaxKind::Reference);
    assert_eq!(referent.text_range(), ident.text_range());
    assert_eq!(referent.text(), "Alpha");
}

#[test]
fn non_identifier_referent_is_itself() {
    let assign = element_at("Alpha := 1;", "a.adb", 6);
    assert_eq!(assign.kind(), SyntaxKind::Assign);
    assert_eq!(assign.referent(), assign);
}

#[test]
fn parent_chain_reaches_root() {
    let ident = element_at("Alpha;", "a.adb", 0);
    let reference = ident.parent().unwrap();
    assert_eq!(reference.kind(), SyntaxKind::Reference);
    let root = reference.parent().unwrap();
    assert_eq!(root.kind(), SyntaxKind::Root);
    assert!(root.parent().is_none());
}

#[test]
fn syntax_materializes_red_element() {
    let ident = element_at("Alpha;", "a.adb", 0);
    let syntax = ident.syntax().unwrap();
    assert_eq!(syntax.kind(), SyntaxKind::Ident);
    assert_eq!(syntax.text_range(), ident.text_range());
}

#[test]
fn token_equals_its_reference_node() {
    let ident = element_at("Alpha;", "a.adb", 0);
    assert!(are_equal(&ident, &ident.referent()));
    assert!(are_equal(&ident.referent(), &ident));
}

#[test]
fn same_node_across_reparse_is_equal() {
    let first = element_at("Alpha := beta;", "a.adb", 9);
    let second = element_at("Alpha := beta;", "a.adb", 10);
    assert!(!first.tree().same_snapshot(second.tree()));
    assert!(are_equal(&first, &second));
}

#[test]
fn same_text_elsewhere_is_not_equal() {
    let tree = SyntaxTree::parse("x := x;");
    let left = tree.find_element_at(&file("a.adb"), 0).unwrap();
    let right = tree.find_element_at(&file("a.adb"), 5).unwrap();
    assert_eq!(left.text(), right.text());
    assert!(!are_equal(&left, &right));
}

#[test]
fn same_range_in_other_file_is_not_equal() {
    let left = element_at("Alpha;", "a.adb", 0);
    let right = element_at("Alpha;", "b.adb", 0);
    assert!(!are_equal(&left, &right));
}

#[test]
fn edited_text_at_same_range_is_not_equal() {
    let before = element_at("Alpha;", "a.adb", 0);
    let after = element_at("Gamma;", "a.adb", 0);
    assert_eq!(before.text_range(), after.text_range());
    assert!(!are_equal(&before, &after));
}
