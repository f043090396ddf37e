//! Visual rendering of JSON values.
//!
//! A value is walked into a small tree of [`Node`]s: inline tokens and
//! indented lines. The tree is presentation-neutral; [`super::html`] turns it
//! into markup.

use serde_json::Value;

/// Token classes, used for colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Null,
    Bool,
    Number,
    String,
    Key,
    Bracket,
    Punct,
}

impl TokenKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            TokenKind::Null => "json-null",
            TokenKind::Bool => "json-bool",
            TokenKind::Number => "json-number",
            TokenKind::String => "json-string",
            TokenKind::Key => "json-key",
            TokenKind::Bracket => "json-bracket",
            TokenKind::Punct => "json-punct",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Token { kind: TokenKind, text: String },
    /// A child entry, indented one unit deeper than its parent
    Line { children: Vec<Node> },
}

impl Node {
    fn token(kind: TokenKind, text: impl Into<String>) -> Self {
        Node::Token {
            kind,
            text: text.into(),
        }
    }
}

/// Renders a top-level value.
pub fn render(value: &Value) -> Vec<Node> {
    match value {
        Value::Null => vec![Node::token(TokenKind::Null, "null")],
        Value::Bool(b) => vec![Node::token(TokenKind::Bool, b.to_string())],
        Value::Number(n) => vec![Node::token(TokenKind::Number, n.to_string())],
        Value::String(s) => vec![Node::token(TokenKind::String, format!("\"{}\"", s))],
        Value::Array(items) => {
            let mut nodes = vec![Node::token(TokenKind::Bracket, "[")];
            for (index, item) in items.iter().enumerate() {
                let mut children = render(item);
                if index + 1 < items.len() {
                    children.push(Node::token(TokenKind::Punct, ","));
                }
                nodes.push(Node::Line { children });
            }
            nodes.push(Node::token(TokenKind::Bracket, "]"));
            nodes
        }
        Value::Object(map) => {
            let mut nodes = vec![Node::token(TokenKind::Bracket, "{")];
            for (index, (key, item)) in map.iter().enumerate() {
                let mut children = vec![
                    Node::token(TokenKind::Key, format!("\"{}\"", key)),
                    Node::token(TokenKind::Punct, ": "),
                ];
                children.extend(render(item));
                if index + 1 < map.len() {
                    children.push(Node::token(TokenKind::Punct, ","));
                }
                nodes.push(Node::Line { children });
            }
            nodes.push(Node::token(TokenKind::Bracket, "}"));
            nodes
        }
    }
}

/// Two-space indented JSON for the copy button.
pub fn clipboard_text(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tok(kind: TokenKind, text: &str) -> Node {
        Node::token(kind, text)
    }

    #[test]
    fn test_scalars() {
        assert_eq!(render(&Value::Null), vec![tok(TokenKind::Null, "null")]);
        assert_eq!(render(&json!(true)), vec![tok(TokenKind::Bool, "true")]);
        assert_eq!(render(&json!(1.5)), vec![tok(TokenKind::Number, "1.5")]);
        assert_eq!(render(&json!("hi")), vec![tok(TokenKind::String, "\"hi\"")]);
    }

    #[test]
    fn test_array_commas_between_siblings() {
        let nodes = render(&json!([1, 2]));
        assert_eq!(
            nodes,
            vec![
                tok(TokenKind::Bracket, "["),
                Node::Line {
                    children: vec![tok(TokenKind::Number, "1"), tok(TokenKind::Punct, ",")],
                },
                Node::Line {
                    children: vec![tok(TokenKind::Number, "2")],
                },
                tok(TokenKind::Bracket, "]"),
            ]
        );
    }

    #[test]
    fn test_object_preserves_key_order_and_nests() {
        let value: Value = serde_json::from_str(r#"{"z":{"a":null},"b":[]}"#).unwrap();
        let nodes = render(&value);

        let Node::Line { children } = &nodes[1] else {
            panic!("expected line");
        };
        assert_eq!(children[0], tok(TokenKind::Key, "\"z\""));
        assert_eq!(children[1], tok(TokenKind::Punct, ": "));
        assert_eq!(children[2], tok(TokenKind::Bracket, "{"));
        assert!(matches!(&children[3], Node::Line { .. }));
        assert_eq!(children.last(), Some(&tok(TokenKind::Punct, ",")));

        let Node::Line { children, .. } = &nodes[2] else {
            panic!("expected line");
        };
        assert_eq!(children[0], tok(TokenKind::Key, "\"b\""));
        assert_eq!(children[2], tok(TokenKind::Bracket, "["));
        assert_eq!(children[3], tok(TokenKind::Bracket, "]"));
    }

    #[test]
    fn test_clipboard_text_is_two_space_json() {
        let value = json!({"a": [1, {"b": null}]});
        assert_eq!(
            clipboard_text(&value),
            "{\n  \"a\": [\n    1,\n    {\n      \"b\": null\n    }\n  ]\n}"
        );
    }

    #[test]
    fn test_clipboard_round_trip() {
        let source = r#"{"zeta":1,"alpha":[true,"x",{"m":null,"b":2.5}],"nested":{"k":[]}}"#;
        let value: Value = serde_json::from_str(source).unwrap();
        let reparsed: Value = serde_json::from_str(&clipboard_text(&value)).unwrap();
        assert_eq!(reparsed, value);

        let keys: Vec<_> = reparsed.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "nested"]);
    }
}
