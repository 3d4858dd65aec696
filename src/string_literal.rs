use nom::{branch::*, bytes::complete::*, multi::*, sequence::*, IResult};

/// Joiner used for literals assigned in a declaration.
pub const DECLARATION_JOINER: &str = "\n\t";

/// Joiner used for bare literals spanning a whole file.
pub const LIBRARY_JOINER: &str = "\n";

/// Renders one line as a C string literal, newline included.
///
/// Double quotes are escaped and trailing whitespace is dropped. Backslashes are kept as is.
pub fn quote_line(line: &str) -> String {
	format!("\"{}\\n\"", line.replace('"', "\\\"").trim_end())
}

/// Renders lines as adjacent string literals, each one followed by `joiner`.
///
/// The result also starts with `joiner`, so that the first literal sits on its own line.
pub fn render_lines<S: AsRef<str>>(lines: &[S], joiner: &str) -> String {
	let mut result = joiner.to_string();
	for line in lines {
		result.push_str(&quote_line(line.as_ref()));
		result.push_str(joiner);
	}
	result
}

fn line(input: &str) -> IResult<&str, &str> {
	terminated(
		take_till(|c: char| c == '\r' || c == '\n'),
		alt((tag("\r\n"), tag("\r"), tag("\n"))),
	)(input)
}

/// Splits text into lines ended by `\r\n`, `\n` or a bare `\r`.
pub fn split_lines(contents: &str) -> Vec<&str> {
	let (rest, mut lines) = many0(line)(contents).unwrap_or((contents, Vec::new()));
	if !rest.is_empty() {
		lines.push(rest);
	}
	lines
}

/// Wraps a line in quotes without any escaping.
pub fn wrap_line(line: &str) -> String {
	format!("\"{}\\n\"", line)
}

#[cfg(test)]
mod tests {
	use super::*;

	// Concatenates adjacent literals and resolves their escapes.
	fn unescape(rendered: &str) -> String {
		let mut result = String::new();
		let mut in_literal = false;
		let mut chars = rendered.chars();
		while let Some(c) = chars.next() {
			match (in_literal, c) {
				(false, '"') => in_literal = true,
				(false, _) => {}
				(true, '"') => in_literal = false,
				(true, '\\') => match chars.next() {
					Some('n') => result.push('\n'),
					Some(other) => result.push(other),
					None => {}
				},
				(true, _) => result.push(c),
			}
		}
		result
	}

	#[test]
	fn test_quote_line() {
		assert_eq!(quote_line("  float x;   \n"), "\"  float x;\\n\"");
		assert_eq!(quote_line(""), "\"\\n\"");
	}

	#[test]
	fn test_render_lines() {
		assert_eq!(
			render_lines(&["a", "b\""], DECLARATION_JOINER),
			"\n\t\"a\\n\"\n\t\"b\\\"\\n\"\n\t"
		);
	}

	#[test]
	fn test_render_lines_empty() {
		assert_eq!(render_lines::<&str>(&[], LIBRARY_JOINER), "\n");
	}

	#[test]
	fn test_render_lines_quote_round_trip() {
		let lines = [
			"#include \"Lighting.h\"",
			"\tvec3 c = \"\"; \t ",
			"\"",
			"  out vec4 color;",
		];

		let rendered = render_lines(&lines, LIBRARY_JOINER);

		let expected: String = lines
			.iter()
			.map(|line| format!("{}\n", line.trim_end()))
			.collect();
		assert_eq!(unescape(&rendered), expected);
	}

	#[test]
	fn test_split_lines() {
		assert_eq!(
			split_lines("#shader vertex\rvoid main() {}\r\n\n#shader fragment\rout vec4 c;"),
			vec!["#shader vertex", "void main() {}", "", "#shader fragment", "out vec4 c;"]
		);
		assert_eq!(split_lines("a\r\r\nb\n"), vec!["a", "", "b"]);
		assert_eq!(split_lines(""), Vec::<&str>::new());
	}

	#[test]
	fn test_wrap_line() {
		assert_eq!(wrap_line("uniform vec3 \"c\";"), "\"uniform vec3 \"c\";\\n\"");
	}
}
