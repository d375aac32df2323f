//! Character-level tokenizer for markup documents.
//!
//! Produces a flat token stream the tree parser consumes. `<style>` and
//! `<script>` bodies are raw text: their content is swallowed as a
//! single text token so embedded CSS/JS cannot confuse tag scanning.

use crate::error::{ParseError, ParseResult};

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Doctype,
    Comment(String),
    OpenTag {
        name: String,
        attributes: Vec<(String, String)>,
        self_closing: bool,
    },
    CloseTag(String),
    Text(String),
}

/// Tokenize markup into `(token, char_position)` pairs
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();

    while !scanner.is_at_end() {
        let start = scanner.pos;

        if scanner.starts_with("<!--") {
            scanner.consume(4);
            let content = scanner.take_until("-->")?;
            scanner.consume(3);
            tokens.push((Token::Comment(unescape_markup(content.trim())), start));
        } else if scanner.starts_with_ignore_case("<!doctype") {
            scanner.take_until(">")?;
            scanner.consume(1);
            tokens.push((Token::Doctype, start));
        } else if scanner.starts_with("</") {
            scanner.consume(2);
            let name = scanner.take_name();
            scanner.take_until(">")?;
            scanner.consume(1);
            tokens.push((Token::CloseTag(name), start));
        } else if scanner.at_tag_start() {
            scanner.consume(1);
            let name = scanner.take_name();
            let (attributes, self_closing) = scanner.take_attributes()?;
            let raw_text = !self_closing && matches!(name.as_str(), "script" | "style");
            tokens.push((
                Token::OpenTag {
                    name: name.clone(),
                    attributes,
                    self_closing,
                },
                start,
            ));

            if raw_text {
                let close = format!("</{}", name);
                let raw_start = scanner.pos;
                let raw = scanner.take_until_ignore_case(&close)?;
                if !raw.trim().is_empty() {
                    tokens.push((Token::Text(raw.trim().to_string()), raw_start));
                }
            }
        } else {
            let text = scanner.take_text();
            if !text.trim().is_empty() {
                tokens.push((Token::Text(unescape_markup(text.trim())), start));
            }
        }
    }

    Ok(tokens)
}

/// Reverse of the generator's entity escaping
pub fn unescape_markup(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn consume(&mut self, count: usize) {
        self.pos = (self.pos + count).min(self.chars.len());
    }

    fn starts_with(&self, prefix: &str) -> bool {
        prefix
            .chars()
            .enumerate()
            .all(|(i, ch)| self.peek_at(i) == Some(ch))
    }

    fn starts_with_ignore_case(&self, prefix: &str) -> bool {
        prefix.chars().enumerate().all(|(i, ch)| {
            self.peek_at(i)
                .map(|c| c.eq_ignore_ascii_case(&ch))
                .unwrap_or(false)
        })
    }

    fn at_tag_start(&self) -> bool {
        self.peek() == Some('<')
            && self
                .peek_at(1)
                .map(|c| c.is_ascii_alphabetic())
                .unwrap_or(false)
    }

    /// Consume up to (not including) `needle`, error at EOF
    fn take_until(&mut self, needle: &str) -> ParseResult<String> {
        let start = self.pos;
        while !self.is_at_end() {
            if self.starts_with(needle) {
                return Ok(self.chars[start..self.pos].iter().collect());
            }
            self.pos += 1;
        }
        Err(ParseError::unexpected_eof(start))
    }

    fn take_until_ignore_case(&mut self, needle: &str) -> ParseResult<String> {
        let start = self.pos;
        while !self.is_at_end() {
            if self.starts_with_ignore_case(needle) {
                return Ok(self.chars[start..self.pos].iter().collect());
            }
            self.pos += 1;
        }
        Err(ParseError::unexpected_eof(start))
    }

    /// Tag or attribute name, lowercased
    fn take_name(&mut self) -> String {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                self.pos += 1;
            } else {
                break;
            }
        }
        self.chars[start..self.pos]
            .iter()
            .collect::<String>()
            .to_ascii_lowercase()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().map(|c| c.is_whitespace()).unwrap_or(false) {
            self.pos += 1;
        }
    }

    fn take_attributes(&mut self) -> ParseResult<(Vec<(String, String)>, bool)> {
        let mut attributes = Vec::new();

        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(ParseError::unexpected_eof(self.pos)),
                Some('>') => {
                    self.consume(1);
                    return Ok((attributes, false));
                }
                Some('/') => {
                    if self.peek_at(1) == Some('>') {
                        self.consume(2);
                        return Ok((attributes, true));
                    }
                    self.consume(1);
                }
                Some(_) => {
                    let name = self.take_name();
                    if name.is_empty() {
                        return Err(ParseError::invalid_markup(
                            self.pos,
                            format!("unexpected character {:?} in tag", self.peek()),
                        ));
                    }
                    self.skip_whitespace();
                    let value = if self.peek() == Some('=') {
                        self.consume(1);
                        self.skip_whitespace();
                        self.take_attribute_value()?
                    } else {
                        String::new()
                    };
                    attributes.push((name, unescape_markup(&value)));
                }
            }
        }
    }

    fn take_attribute_value(&mut self) -> ParseResult<String> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.consume(1);
                let value = self.take_until(&quote.to_string())?;
                self.consume(1);
                Ok(value)
            }
            _ => {
                let start = self.pos;
                while let Some(ch) = self.peek() {
                    if ch.is_whitespace() || ch == '>' || ch == '/' {
                        break;
                    }
                    self.pos += 1;
                }
                Ok(self.chars[start..self.pos].iter().collect())
            }
        }
    }

    fn take_text(&mut self) -> String {
        let start = self.pos;
        // A '<' that opened no construct is plain text; consume it so
        // the scanner always makes progress
        if self.peek() == Some('<') {
            self.pos += 1;
        }
        while let Some(ch) = self.peek() {
            if ch == '<' {
                break;
            }
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple_element() {
        let tokens = tokenize(r#"<button id="n1" disabled>Click</button>"#).unwrap();
        assert_eq!(
            tokens[0].0,
            Token::OpenTag {
                name: "button".to_string(),
                attributes: vec![
                    ("id".to_string(), "n1".to_string()),
                    ("disabled".to_string(), String::new()),
                ],
                self_closing: false,
            }
        );
        assert_eq!(tokens[1].0, Token::Text("Click".to_string()));
        assert_eq!(tokens[2].0, Token::CloseTag("button".to_string()));
    }

    #[test]
    fn test_tokenize_self_closing_and_doctype() {
        let tokens = tokenize("<!DOCTYPE html>\n<input type=\"text\" />").unwrap();
        assert_eq!(tokens[0].0, Token::Doctype);
        assert!(matches!(
            &tokens[1].0,
            Token::OpenTag { name, self_closing: true, .. } if name == "input"
        ));
    }

    #[test]
    fn test_tokenize_comment() {
        let tokens = tokenize("<!-- View: Landing -->").unwrap();
        assert_eq!(tokens[0].0, Token::Comment("View: Landing".to_string()));
    }

    #[test]
    fn test_style_content_is_raw_text() {
        let source = "<style>.btn > a { color: red; }</style>";
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].0, Token::Text(".btn > a { color: red; }".to_string()));
        assert_eq!(tokens[2].0, Token::CloseTag("style".to_string()));
    }

    #[test]
    fn test_script_content_is_raw_text() {
        let source = "<script>if (a < b) { go(); }</script>";
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens[1].0, Token::Text("if (a < b) { go(); }".to_string()));
    }

    #[test]
    fn test_entities_unescaped_in_comments() {
        let tokens = tokenize("<!-- View: A --&gt; B -->").unwrap();
        assert_eq!(tokens[0].0, Token::Comment("View: A --> B".to_string()));
    }

    #[test]
    fn test_entities_unescaped_in_text() {
        let tokens = tokenize("<p>a &amp; b &lt;c&gt;</p>").unwrap();
        assert_eq!(tokens[1].0, Token::Text("a & b <c>".to_string()));
    }

    #[test]
    fn test_unterminated_comment_errors() {
        assert!(tokenize("<!-- never closed").is_err());
    }

    #[test]
    fn test_unquoted_attribute_value() {
        let tokens = tokenize("<progress value=30></progress>").unwrap();
        assert!(matches!(
            &tokens[0].0,
            Token::OpenTag { attributes, .. }
                if attributes == &[("value".to_string(), "30".to_string())]
        ));
    }
}
