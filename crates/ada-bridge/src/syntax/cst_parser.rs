use rowan::{GreenNode, GreenNodeBuilder};

use crate::syntax::{kind::SyntaxKind, lexer::Lexer};

/// Builds the host tree for an Ada source file.
///
/// There is no grammar: the tree is a flat `Root` whose only composite
/// children are `Reference` nodes, one around every identifier token. Name
/// resolution is left to the analysis service.
pub struct Parser<'a> {
    tokens: Vec<(SyntaxKind, &'a str)>,
    builder: GreenNodeBuilder<'static>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: Lexer::new(input).collect(),
            builder: GreenNodeBuilder::new(),
        }
    }

    pub fn parse(mut self) -> GreenNode {
        self.builder.start_node(SyntaxKind::Root.into());
        for (kind, text) in std::mem::take(&mut self.tokens) {
            if kind == SyntaxKind::Ident {
                self.builder.start_node(SyntaxKind::Reference.into());
                self.builder.token(kind.into(), text);
                self.builder.finish_node();
            } else {
                self.builder.token(kind.into(), text);
            }
        }
        self.builder.finish_node();
        self.builder.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/src/syntax/cst_parser_tests.rs"]
mod tests;
