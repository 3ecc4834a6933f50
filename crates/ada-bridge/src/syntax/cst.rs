use rowan::Language;

use crate::syntax::kind::SyntaxKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AdaLanguage {}

impl Language for AdaLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        let raw = raw.0;
        assert!(raw <= SyntaxKind::Root as u16);
        // SAFETY: The assertion ensures that the value is within the range of valid discriminants
        // for SyntaxKind, which is repr(u16) with contiguous discriminants starting at 0.
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

pub type SyntaxNode = rowan::SyntaxNode<AdaLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<AdaLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<AdaLanguage>;
