//! Inflector helpers used to derive wire names and resource types.
//!
//! Only the subset of inflections needed for JSON:API naming is provided:
//! converting identifiers to snake_case, stripping module paths, and
//! pluralizing the trailing word of a snake_case name.

use convert_case::{Boundary, Case, Converter};

/// Word boundaries recognized when splitting an identifier.
///
/// Only a digit followed by an uppercase letter splits around digits:
/// `address_line1` keeps `line1` as one word, `line1Total` splits into
/// `line1` and `Total`.
pub(crate) const WORD_BOUNDARIES: [Boundary; 6] = [
	Boundary::Underscore,
	Boundary::Hyphen,
	Boundary::Space,
	Boundary::LowerUpper,
	Boundary::DigitUpper,
	Boundary::Acronym,
];

/// Convert words joined in any of the supported casings into the given case.
pub(crate) fn convert_words(name: &str, case: Case) -> String {
	Converter::new()
		.set_boundaries(&WORD_BOUNDARIES)
		.to_case(case)
		.convert(name)
}

/// Convert an identifier to snake_case.
///
/// # Examples
///
/// ```rust
/// use reinhardt_inflection::underscore;
///
/// assert_eq!(underscore("LongComment"), "long_comment");
/// assert_eq!(underscore("first-name"), "first_name");
/// assert_eq!(underscore("firstName"), "first_name");
/// assert_eq!(underscore("HTTPRequest"), "http_request");
/// assert_eq!(underscore("already_snake"), "already_snake");
/// ```
pub fn underscore(name: &str) -> String {
	if name.is_empty() {
		return String::new();
	}
	convert_words(name, Case::Snake)
}

/// Strip the module path from a class name.
///
/// ```rust
/// use reinhardt_inflection::demodulize;
///
/// assert_eq!(demodulize("MyApp::Blog::LongComment"), "LongComment");
/// assert_eq!(demodulize("Article"), "Article");
/// ```
pub fn demodulize(class_name: &str) -> &str {
	match class_name.rfind("::") {
		Some(index) => &class_name[index + 2..],
		None => class_name,
	}
}

/// Words whose plural is the word itself.
const UNCOUNTABLE: &[&str] = &[
	"equipment",
	"information",
	"rice",
	"money",
	"species",
	"series",
	"fish",
	"sheep",
	"jeans",
	"police",
	"news",
	"metadata",
];

/// Irregular singular/plural pairs, also matched as the tail of a word
/// (`salesperson`, `grandchild`).
const IRREGULAR: &[(&str, &str)] = &[
	("person", "people"),
	("woman", "women"),
	("man", "men"),
	("child", "children"),
	("sex", "sexes"),
	("move", "moves"),
	("zombie", "zombies"),
	("mouse", "mice"),
	("louse", "lice"),
];

/// Irregular pairs that only apply to the whole word (`box` is not `boxen`).
const IRREGULAR_WORDS: &[(&str, &str)] = &[
	("ox", "oxen"),
	("tooth", "teeth"),
	("foot", "feet"),
	("goose", "geese"),
];

/// Pluralize a single lowercase English word.
///
/// Rules are checked from the most specific to the most general; the first
/// one matching the word wins.
///
/// # Examples
///
/// ```rust
/// use reinhardt_inflection::pluralize;
///
/// assert_eq!(pluralize("article"), "articles");
/// assert_eq!(pluralize("person"), "people");
/// assert_eq!(pluralize("salesperson"), "salespeople");
/// assert_eq!(pluralize("category"), "categories");
/// assert_eq!(pluralize("address"), "addresses");
/// assert_eq!(pluralize("knife"), "knives");
/// assert_eq!(pluralize("series"), "series");
/// ```
pub fn pluralize(word: &str) -> String {
	if word.is_empty() {
		return String::new();
	}

	let lower = word.to_lowercase();
	if UNCOUNTABLE.contains(&lower.as_str()) {
		return word.to_string();
	}
	if let Some((_, plural)) = IRREGULAR
		.iter()
		.chain(IRREGULAR_WORDS)
		.find(|(singular, plural)| lower == *singular || lower == *plural)
	{
		return keep_leading_case(word, plural);
	}

	if !word.is_ascii() {
		return format!("{}s", word);
	}

	if let Some((singular, plural)) = IRREGULAR
		.iter()
		.find(|(singular, _)| lower.ends_with(singular))
	{
		let (head, tail) = word.split_at(word.len() - singular.len());
		return format!("{}{}", head, keep_leading_case(tail, plural));
	}

	let stem = |suffix_len: usize| &word[..word.len() - suffix_len];

	if lower.ends_with("quiz") {
		return format!("{}zes", word);
	}
	for ending in ["matrix", "vertex", "index"] {
		if lower.ends_with(ending) {
			return format!("{}ices", stem(2));
		}
	}
	if lower.ends_with("sis") {
		return format!("{}ses", stem(3));
	}
	if lower.ends_with("alias") || lower.ends_with("status") || lower.ends_with("bus") {
		return format!("{}es", word);
	}
	if lower.ends_with("octopus") || lower.ends_with("virus") {
		return format!("{}i", stem(2));
	}
	if lower.ends_with("x") || lower.ends_with("ch") || lower.ends_with("ss") || lower.ends_with("sh")
	{
		return format!("{}es", word);
	}
	if lower.ends_with('y') && !ends_with_vowel_y(&lower) {
		return format!("{}ies", stem(1));
	}
	if lower.ends_with("fe") && !lower.ends_with("ffe") {
		return format!("{}ves", stem(2));
	}
	if lower.ends_with("lf") || lower.ends_with("rf") {
		return format!("{}ves", stem(1));
	}
	if lower.ends_with("tum") || lower.ends_with("ium") {
		return format!("{}a", stem(2));
	}
	if lower.ends_with("buffalo") || lower.ends_with("tomato") {
		return format!("{}es", word);
	}
	if lower.ends_with('s') {
		return word.to_string();
	}
	format!("{}s", word)
}

/// `-ay`, `-ey`, `-oy` and `-uy` words take a plain `s`; `-quy` behaves like a consonant.
fn ends_with_vowel_y(lower: &str) -> bool {
	let mut chars = lower.chars().rev().skip(1);
	match chars.next() {
		Some('u') => chars.next() != Some('q'),
		Some('a' | 'e' | 'i' | 'o') => true,
		_ => false,
	}
}

fn keep_leading_case(original: &str, replacement: &str) -> String {
	let mut chars = replacement.chars();
	match (original.chars().next(), chars.next()) {
		(Some(first), Some(head)) if first.is_uppercase() => {
			head.to_uppercase().chain(chars).collect()
		}
		_ => replacement.to_string(),
	}
}

/// Derive the table-style name of a class: demodulized, snake_cased and
/// with its trailing word pluralized.
///
/// # Examples
///
/// ```rust
/// use reinhardt_inflection::tableize;
///
/// assert_eq!(tableize("MyApp::LongComment"), "long_comments");
/// assert_eq!(tableize("Person"), "people");
/// assert_eq!(tableize("BlogCategory"), "blog_categories");
/// ```
pub fn tableize(class_name: &str) -> String {
	let snake = underscore(demodulize(class_name));
	match snake.rsplit_once('_') {
		Some((head, last)) => format!("{}_{}", head, pluralize(last)),
		None => pluralize(&snake),
	}
}
