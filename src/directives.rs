use log::warn;
use nom::{
	bytes::complete::*, character::complete::*, combinator::*, sequence::*, IResult,
};
use std::collections::BTreeMap;

/// Maps lowercase directive keywords to the identifiers they declare.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveMap {
	identifiers: BTreeMap<String, String>,
}

impl DirectiveMap {
	pub fn new<K: AsRef<str>, V: Into<String>>(entries: impl IntoIterator<Item = (K, V)>) -> Self {
		DirectiveMap {
			identifiers: entries
				.into_iter()
				.map(|(keyword, identifier)| (keyword.as_ref().to_lowercase(), identifier.into()))
				.collect(),
		}
	}

	pub fn get(&self, keyword: &str) -> Option<&str> {
		self.identifiers
			.get(&keyword.trim().to_lowercase())
			.map(String::as_str)
	}
}

impl Default for DirectiveMap {
	fn default() -> Self {
		DirectiveMap::new(vec![
			("vertex", "vertexShaderSource"),
			("geometry", "geometryShaderSource"),
			("fragment", "fragmentShaderSource"),
		])
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Section<'a> {
	pub key: &'a str,
	pub lines: Vec<&'a str>,
}

const MARKER: &str = "#shader";

fn directive(input: &str) -> IResult<&str, &str> {
	preceded(pair(tag(MARKER), space1), rest)(input)
}

/// Returns the keyword of a `#shader <keyword>` line.
pub fn parse_directive(line: &str) -> Option<&str> {
	directive(line.trim()).ok().map(|(_, keyword)| keyword)
}

/// Groups lines into sections, each one opened by a recognized directive line.
///
/// Lines before the first directive, and lines following an unrecognized directive, are dropped.
pub fn split<'a>(lines: &[&'a str], directives: &'a DirectiveMap) -> Vec<Section<'a>> {
	let mut sections: Vec<Section> = Vec::new();
	let mut current: Option<usize> = None;

	for (index, &line) in lines.iter().enumerate() {
		match parse_directive(line) {
			Some(keyword) => match directives.get(keyword) {
				Some(key) => {
					sections.push(Section { key, lines: vec![] });
					current = Some(sections.len() - 1);
				}
				None => {
					warn!("Unrecognized shader directive '{}'.", keyword.trim());
					current = None;
				}
			},
			None => {
				if line.contains(MARKER) {
					warn!(
						"Line {} mentions '{}' but is not a directive.",
						index + 1,
						MARKER
					);
				}
				if let Some(current) = current {
					sections[current].lines.push(line);
				}
			}
		}
	}

	sections
}
