//! Stylesheet and declaration-list parsing on top of cssparser.
//!
//! Only what the cascade consumes is kept: qualified rules with their raw
//! selector prelude, and declarations with an importance flag. At-rules are
//! skipped whole.

use cssparser::{
    AtRuleParser, BasicParseErrorKind, CowRcStr, DeclarationParser, ParseError, Parser,
    ParserInput, ParserState, QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser,
    StyleSheetParser,
};
use log::{debug, warn};

/// `property: value [!important]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// ASCII-lowercased.
    pub name: String,
    /// Authored text without the importance suffix, trimmed.
    pub value: String,
    pub important: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleRule {
    /// Selector list as written.
    pub prelude: String,
    pub declarations: Vec<Declaration>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stylesheet {
    /// Source order.
    pub rules: Vec<StyleRule>,
}

/// Split a trailing `!important` off a raw value.
fn split_important(raw: &str) -> (String, bool) {
    let trimmed = raw.trim();
    let lowered = trimmed.to_ascii_lowercase();
    if let Some(bang) = lowered.rfind('!')
        && lowered[bang + 1..].trim() == "important"
        && let Some(head) = trimmed.get(..bang)
    {
        return (head.trim_end().to_owned(), true);
    }
    (trimmed.to_owned(), false)
}

/// Collects declarations inside a block or a `style` attribute.
struct DeclarationCollector;

impl<'input> DeclarationParser<'input> for DeclarationCollector {
    type Declaration = Declaration;
    type Error = ();

    fn parse_value<'tokens>(
        &mut self,
        name: CowRcStr<'input>,
        input: &mut Parser<'input, 'tokens>,
        _declaration_start: &ParserState,
    ) -> Result<Self::Declaration, ParseError<'input, Self::Error>> {
        let start = input.position();
        while input.next_including_whitespace_and_comments().is_ok() {}
        let (value, important) = split_important(input.slice_from(start));
        if value.is_empty() {
            return Err(input.new_error(BasicParseErrorKind::EndOfInput));
        }
        Ok(Declaration {
            name: name.to_ascii_lowercase(),
            value,
            important,
        })
    }
}

impl<'input> AtRuleParser<'input> for DeclarationCollector {
    type Prelude = ();
    type AtRule = Declaration;
    type Error = ();
}

impl<'input> QualifiedRuleParser<'input> for DeclarationCollector {
    type Prelude = ();
    type QualifiedRule = Declaration;
    type Error = ();
}

impl RuleBodyItemParser<'_, Declaration, ()> for DeclarationCollector {
    fn parse_declarations(&self) -> bool {
        true
    }

    fn parse_qualified(&self) -> bool {
        false
    }
}

/// Top-level rule collector; nested at-rule blocks are rejected and skipped.
struct RuleCollector;

impl<'input> AtRuleParser<'input> for RuleCollector {
    type Prelude = String;
    type AtRule = StyleRule;
    type Error = ();

    fn parse_prelude<'tokens>(
        &mut self,
        name: CowRcStr<'input>,
        input: &mut Parser<'input, 'tokens>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        while input.next().is_ok() {}
        Ok(name.to_string())
    }

    fn parse_block<'tokens>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'input, 'tokens>,
    ) -> Result<Self::AtRule, ParseError<'input, Self::Error>> {
        debug!("skipping @{prelude} block");
        Err(input.new_error(BasicParseErrorKind::AtRuleBodyInvalid))
    }

    fn rule_without_block(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
    ) -> Result<Self::AtRule, ()> {
        debug!("skipping @{prelude} statement");
        Err(())
    }
}

impl<'input> QualifiedRuleParser<'input> for RuleCollector {
    type Prelude = String;
    type QualifiedRule = StyleRule;
    type Error = ();

    fn parse_prelude<'tokens>(
        &mut self,
        input: &mut Parser<'input, 'tokens>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        let start = input.position();
        while input.next_including_whitespace_and_comments().is_ok() {}
        Ok(input.slice_from(start).trim().to_owned())
    }

    fn parse_block<'tokens>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'input, 'tokens>,
    ) -> Result<Self::QualifiedRule, ParseError<'input, Self::Error>> {
        Ok(StyleRule {
            prelude,
            declarations: collect_declarations(input),
        })
    }
}

fn collect_declarations(input: &mut Parser<'_, '_>) -> Vec<Declaration> {
    let mut collector = DeclarationCollector;
    let mut out = Vec::new();
    for item in RuleBodyParser::new(input, &mut collector) {
        match item {
            Ok(declaration) => out.push(declaration),
            Err((_, slice)) => warn!("ignoring invalid declaration `{}`", slice.trim()),
        }
    }
    out
}

/// Parse a whole stylesheet. Invalid rules are dropped with a warning.
pub fn parse_stylesheet(css: &str) -> Stylesheet {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut collector = RuleCollector;
    let mut sheet = Stylesheet::default();
    for item in StyleSheetParser::new(&mut parser, &mut collector) {
        match item {
            Ok(rule) => sheet.rules.push(rule),
            Err((_, slice)) if slice.trim_start().starts_with('@') => {}
            Err((_, slice)) => warn!("ignoring invalid rule `{}`", slice.trim()),
        }
    }
    sheet
}

/// Parse the contents of a `style="..."` attribute, in source order.
pub fn parse_style_attribute(text: &str) -> Vec<Declaration> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    collect_declarations(&mut parser)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn importance_is_split_off_the_value() {
        assert_eq!(split_important("red !important"), ("red".to_owned(), true));
        assert_eq!(split_important(" 1px  solid ! IMPORTANT "), ("1px  solid".to_owned(), true));
        assert_eq!(split_important("url(a!b)"), ("url(a!b)".to_owned(), false));
    }

    #[test]
    fn rules_keep_their_prelude_and_at_rules_are_skipped() {
        let sheet = parse_stylesheet(
            "@media (max-width: 10px) { p { color: red } }\n\
             @import url(x.css);\n\
             div > p, .a { Color: blue; margin: 0 auto !important }",
        );
        assert_eq!(sheet.rules.len(), 1);
        let rule = &sheet.rules[0];
        assert_eq!(rule.prelude, "div > p, .a");
        assert_eq!(
            rule.declarations,
            vec![
                Declaration {
                    name: "color".to_owned(),
                    value: "blue".to_owned(),
                    important: false,
                },
                Declaration {
                    name: "margin".to_owned(),
                    value: "0 auto".to_owned(),
                    important: true,
                },
            ]
        );
    }

    #[test]
    fn style_attribute_tolerates_junk() {
        let declarations = parse_style_attribute("color: red; ; width ; height: 10px;");
        let names: Vec<_> = declarations.iter().map(|decl| decl.name.as_str()).collect();
        assert_eq!(names, vec!["color", "height"]);
    }
}
