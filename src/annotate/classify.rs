use tree_sitter::Node;

/// Declaration kinds a docblock can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Class,
    Interface,
    Trait,
    Enum,
    EnumCase,
    Method,
    Property,
    ClassConstant,
    FreeFunction,
    FreeConstant,
}

impl MemberKind {
    /// Maps a parsed node to its kind. Nodes that cannot carry a
    /// docblock return `None` and are never considered by the planner.
    #[must_use]
    pub fn classify(node: Node) -> Option<Self> {
        match node.kind() {
            "class_declaration" => Some(Self::Class),
            "interface_declaration" => Some(Self::Interface),
            "trait_declaration" => Some(Self::Trait),
            "enum_declaration" => Some(Self::Enum),
            "enum_case" => Some(Self::EnumCase),
            "method_declaration" => Some(Self::Method),
            "property_declaration" => Some(Self::Property),
            "function_definition" => Some(Self::FreeFunction),
            // `const` is one grammar rule for both class constants and
            // top-level constants; the parent decides which one it is.
            "const_declaration" => Some(if in_type_body(node) {
                Self::ClassConstant
            } else {
                Self::FreeConstant
            }),
            _ => None,
        }
    }

    /// Member-level declarations take the indented docblock style.
    #[must_use]
    pub fn is_member(self) -> bool {
        matches!(
            self,
            Self::Method | Self::Property | Self::ClassConstant | Self::EnumCase
        )
    }

    /// Parses a config token, case-insensitively. Unknown tokens yield
    /// `None` and are dropped by the config layer.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "method" => Some(Self::Method),
            "property" => Some(Self::Property),
            "constant" => Some(Self::ClassConstant),
            "class" => Some(Self::Class),
            "interface" => Some(Self::Interface),
            "trait" => Some(Self::Trait),
            "enum" => Some(Self::Enum),
            "enum_case" => Some(Self::EnumCase),
            "function" => Some(Self::FreeFunction),
            "free_constant" => Some(Self::FreeConstant),
            _ => None,
        }
    }
}

fn in_type_body(node: Node) -> bool {
    matches!(
        node.parent().map(|p| p.kind()),
        Some("declaration_list" | "enum_declaration_list")
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Visibility {
    /// Parses a config token, case-insensitively.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "public" => Some(Self::Public),
            "protected" => Some(Self::Protected),
            "private" => Some(Self::Private),
            _ => None,
        }
    }

    /// Reads a member's declared visibility. PHP members without a
    /// modifier are public.
    #[must_use]
    pub fn of(node: Node, source: &str) -> Self {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "visibility_modifier" {
                let text = &source[child.byte_range()];
                if text.eq_ignore_ascii_case("private") {
                    return Self::Private;
                }
                if text.eq_ignore_ascii_case("protected") {
                    return Self::Protected;
                }
                return Self::Public;
            }
        }
        Self::Public
    }
}

/// Visibility filter predicate. Kinds with no visibility concept match
/// any configured set; enum cases carry no real visibility and are
/// gated on `public` membership instead.
#[must_use]
pub fn matches_visibility(
    node: Node,
    kind: MemberKind,
    source: &str,
    visibilities: &[Visibility],
) -> bool {
    match kind {
        MemberKind::Method | MemberKind::Property | MemberKind::ClassConstant => {
            visibilities.contains(&Visibility::of(node, source))
        }
        MemberKind::EnumCase => visibilities.contains(&Visibility::Public),
        _ => true,
    }
}
