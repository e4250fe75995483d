// tests/annotator_types.rs
//
// Whole-declaration annotation: classes, interfaces, traits, enums,
// enum cases, free functions and constants.

use docstamp_core::annotate::{Annotator, MemberKind, Visibility};

fn annotate_kinds(code: &str, comments: &[&str], kinds: &[MemberKind]) -> String {
    let comments = comments.iter().map(ToString::to_string).collect();
    Annotator::new(comments, vec![Visibility::Public], kinds.to_vec())
        .process(code)
        .unwrap()
}

#[test]
fn annotates_class_declaration() {
    let input = "<?php
class User
{
    public string $name = '';
}
";
    let expected = "<?php
/**
 * comment
 */
class User
{
    public string $name = '';
}
";
    let output = annotate_kinds(input, &["comment"], &[MemberKind::Class]);
    assert_eq!(output, expected);
}

#[test]
fn merges_class_docblock() {
    let input = "<?php
/**
 * existing
 */
class User
{
}
";
    let expected = "<?php
/**
 * existing
 * comment
 */
class User
{
}
";
    let output = annotate_kinds(input, &["comment"], &[MemberKind::Class]);
    assert_eq!(output, expected);
}

#[test]
fn annotates_interface_declaration() {
    let input = "<?php
interface Greeter
{
}
";
    let expected = "<?php
/**
 * comment
 */
interface Greeter
{
}
";
    let output = annotate_kinds(input, &["comment"], &[MemberKind::Interface]);
    assert_eq!(output, expected);
}

#[test]
fn annotates_trait_declaration() {
    let input = "<?php
trait Greets
{
}
";
    let expected = "<?php
/**
 * comment
 */
trait Greets
{
}
";
    let output = annotate_kinds(input, &["comment"], &[MemberKind::Trait]);
    assert_eq!(output, expected);
}

#[test]
fn annotates_enum_but_not_cases() {
    let input = "<?php
enum Suit
{
    case Hearts;
    case Diamonds;
}
";
    let expected = "<?php
/**
 * comment
 */
enum Suit
{
    case Hearts;
    case Diamonds;
}
";
    let output = annotate_kinds(input, &["comment"], &[MemberKind::Enum]);
    assert_eq!(output, expected);
}

#[test]
fn annotates_every_enum_case() {
    let input = "<?php
enum Suit
{
    case Hearts;
    case Diamonds;
}
";
    let expected = "<?php
enum Suit
{
    /**
     * comment
     */
    case Hearts;
    /**
     * comment
     */
    case Diamonds;
}
";
    let output = annotate_kinds(input, &["comment"], &[MemberKind::EnumCase]);
    assert_eq!(output, expected);
}

#[test]
fn annotates_enum_and_cases_together() {
    let input = "<?php
enum Suit
{
    case Hearts;
}
";
    let expected = "<?php
/**
 * comment
 */
enum Suit
{
    /**
     * comment
     */
    case Hearts;
}
";
    let output = annotate_kinds(
        input,
        &["comment"],
        &[MemberKind::Enum, MemberKind::EnumCase],
    );
    assert_eq!(output, expected);
}

#[test]
fn enum_case_is_gated_on_public() {
    let input = "<?php
enum Suit
{
    case Hearts;
}
";
    let comments = vec!["comment".to_string()];
    let output = Annotator::new(
        comments,
        vec![Visibility::Private],
        vec![MemberKind::EnumCase],
    )
    .process(input)
    .unwrap();
    assert_eq!(output, input);
}

#[test]
fn updates_existing_enum_case_docblock() {
    let input = "<?php
enum Suit
{
    /**
     * existing
     */
    case Hearts;
}
";
    let expected = "<?php
enum Suit
{
    /**
     * existing
     * newComment
     */
    case Hearts;
}
";
    let output = annotate_kinds(input, &["newComment"], &[MemberKind::EnumCase]);
    assert_eq!(output, expected);
}

#[test]
fn skips_duplicate_link_line_on_enum() {
    let input = "<?php
/**
 * @link https://example.test/docs
 */
enum Suit
{
    case Hearts;
}
";
    let output = annotate_kinds(
        input,
        &["@link https://example.test/docs"],
        &[MemberKind::Enum],
    );
    assert_eq!(output, input);
}

#[test]
fn annotates_free_function() {
    let input = "<?php
function greet(): string
{
    return 'hi';
}
";
    let expected = "<?php
/**
 * comment
 */
function greet(): string
{
    return 'hi';
}
";
    let output = annotate_kinds(input, &["comment"], &[MemberKind::FreeFunction]);
    assert_eq!(output, expected);
}

#[test]
fn annotates_free_constant() {
    let input = "<?php
const GREETING = 'hi';
";
    let expected = "<?php
/**
 * comment
 */
const GREETING = 'hi';
";
    let output = annotate_kinds(input, &["comment"], &[MemberKind::FreeConstant]);
    assert_eq!(output, expected);
}

#[test]
fn distinguishes_class_constant_from_free_constant() {
    let input = "<?php
const TOP = 1;
class Config
{
    public const INNER = 2;
}
";
    let output = annotate_kinds(input, &["comment"], &[MemberKind::FreeConstant]);
    assert!(output.contains("/**\n * comment\n */\nconst TOP = 1;"));
    assert!(output.contains("{\n    public const INNER = 2;\n}"));
}

#[test]
fn non_matching_kind_is_noop() {
    let input = "<?php
enum Suit
{
    case Hearts;
    case Diamonds;
}
";
    let output = annotate_kinds(input, &["comment"], &[MemberKind::Class]);
    assert_eq!(output, input);
}

#[test]
fn rejects_invalid_php() {
    let annotator = Annotator::with_defaults(vec!["comment".to_string()]);
    assert!(annotator.process("<?php class {").is_err());
}
