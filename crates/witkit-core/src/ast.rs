// Copyright 2026 the witkit authors
// SPDX-License-Identifier: Apache-2.0

//! Abstract Syntax Tree (AST) definitions for WIT documents.
//!
//! The AST represents a WIT source file after parsing. The root is
//! [`Document`], with dedicated slots for the (at most one) `package`
//! clause and `world` declaration plus lists of top-level `use` clauses
//! and `interface` declarations.
//!
//! # Design Philosophy
//!
//! - **Closed sums** - Every alternative in the grammar is an enum
//!   variant, so consumers match exhaustively and the compiler flags
//!   missed cases when the grammar grows.
//! - **Error recovery** - The parser can produce incomplete trees: a type
//!   expression that failed to parse becomes [`TypeExpr::Error`] instead
//!   of aborting the surrounding production.
//! - **Single-pass ownership** - Each node is built once and never
//!   mutated after its production returns; recursion goes through `Box`.
//!
//! # Example
//!
//! ```ignore
//! // Source: package wasi:http@0.2.0
//! Document {
//!     package: Some(PackageDecl {
//!         namespace: "wasi".into(),
//!         name: "http".into(),
//!         version: Some(SemVer { major: 0, minor: 2, patch: 0 }),
//!     }),
//!     ..
//! }
//! ```

use ecow::EcoString;

/// Top-level container for a parsed WIT document.
///
/// A document holds at most one `package` clause and at most one `world`;
/// the grammar expects no more, and if a second appears it simply replaces
/// the slot (checking for duplicates is a semantic concern, not a
/// syntactic one).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// The `package ns:name@version` clause, if present.
    pub package: Option<PackageDecl>,
    /// The `world` declaration, if present.
    pub world: Option<WorldDecl>,
    /// Top-level `use iface.{name}` clauses.
    pub uses: Vec<UseDecl>,
    /// The `interface` declarations, in source order.
    pub interfaces: Vec<InterfaceDecl>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an interface declaration by name.
    #[must_use]
    pub fn interface(&self, name: &str) -> Option<&InterfaceDecl> {
        self.interfaces.iter().find(|i| i.name == name)
    }
}

/// A `package namespace:name@version` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDecl {
    /// The namespace before the colon.
    pub namespace: EcoString,
    /// The package name after the colon.
    pub name: EcoString,
    /// The optional `@major.minor.patch` version.
    pub version: Option<SemVer>,
}

/// A semantic version attached to a package or qualified path.
///
/// Pre-release and build suffixes are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemVer {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl SemVer {
    /// Creates a new version triple.
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl std::fmt::Display for SemVer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// A `world` declaration with its imported and exported items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldDecl {
    /// The world's name.
    pub name: EcoString,
    /// Items declared with `import`.
    pub imports: Vec<ExternItem>,
    /// Items declared with `export`.
    pub exports: Vec<ExternItem>,
}

/// One `import` or `export` item inside a world body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternItem {
    /// The item's name.
    pub name: EcoString,
    /// What the name is bound to, or `None` for a bare reference to a
    /// sibling interface (`import my-iface`).
    pub kind: Option<ExternKind>,
}

/// The payload of a world item after `name:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternKind {
    /// A function type (`import log: func(msg: string)`).
    Func(FuncType),
    /// An inline interface (`export host: interface { .. }`).
    Interface(InterfaceItems),
    /// A qualified path to an interface in another package
    /// (`import wasi:http/types@0.2.0`).
    Path(ExternPath),
}

/// A qualified `namespace:package/interface@version` path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternPath {
    pub namespace: EcoString,
    pub package: EcoString,
    pub interface: EcoString,
    pub version: Option<SemVer>,
}

/// An `interface` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDecl {
    /// The interface's name.
    pub name: EcoString,
    /// The declarations in the interface body.
    pub items: InterfaceItems,
}

/// The body of an interface, named or inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceItems {
    /// `use iface.{name}` aliases.
    pub uses: Vec<UseAlias>,
    /// Type definitions (aliases, records, variants, ...).
    pub typedefs: Vec<TypeDef>,
    /// Named function items.
    pub funcs: Vec<FuncItem>,
}

impl InterfaceItems {
    /// Returns the total number of declarations in the body.
    #[must_use]
    pub fn len(&self) -> usize {
        self.uses.len() + self.typedefs.len() + self.funcs.len()
    }

    /// Returns `true` if the body has no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A top-level `use iface.{name}` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseDecl {
    /// The interface being used.
    pub interface: EcoString,
    /// The name imported from it.
    pub name: EcoString,
}

/// A `use iface.{name}` alias inside an interface body.
///
/// Only the single-name form is supported; multi-name lists are rejected
/// with a parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseAlias {
    /// The interface being used.
    pub interface: EcoString,
    /// The name imported from it.
    pub name: EcoString,
}

/// A named type definition inside an interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDef {
    /// The definition's name.
    pub name: EcoString,
    /// The definition's shape.
    pub kind: TypeDefKind,
}

/// The shape of a type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDefKind {
    /// `type name = ty`
    Alias(TypeExpr),
    /// `record name { field: ty, .. }`
    Record(Vec<Field>),
    /// `variant name { case(ty)?, .. }`
    Variant(Vec<Case>),
    /// `union name { ty, .. }`
    Union(Vec<TypeExpr>),
    /// `enum name { case, .. }`
    Enum(Vec<EcoString>),
    /// `flags name { flag, .. }`
    Flags(Vec<EcoString>),
    /// `resource name { constructor/method/static items }`
    Resource(Vec<ResourceMethod>),
}

/// A field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: EcoString,
    pub ty: TypeExpr,
}

/// A case of a variant, with an optional payload type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub name: EcoString,
    pub payload: Option<TypeExpr>,
}

/// One item inside a resource body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceMethod {
    /// `constructor(params)` - no result list.
    Constructor(Vec<Param>),
    /// `name: func(..) -> ..`
    Method {
        name: EcoString,
        func: FuncType,
    },
    /// `name: static func(..) -> ..`
    Static {
        name: EcoString,
        func: FuncType,
    },
}

/// A named function item inside an interface (`name: func(..) -> ..`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncItem {
    /// The function's name.
    pub name: EcoString,
    /// Its signature.
    pub func: FuncType,
}

/// A function signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuncType {
    /// The parameter list.
    pub params: Vec<Param>,
    /// The result list. A single unnamed result is one entry with
    /// `name: None`; the parenthesized multi-result form yields named
    /// entries.
    pub results: Vec<Param>,
}

/// A parameter or named result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// The name, absent for a single unnamed result.
    pub name: Option<EcoString>,
    /// The type.
    pub ty: TypeExpr,
}

impl Param {
    /// Creates a named parameter.
    #[must_use]
    pub fn named(name: impl Into<EcoString>, ty: TypeExpr) -> Self {
        Self {
            name: Some(name.into()),
            ty,
        }
    }

    /// Creates an unnamed result entry.
    #[must_use]
    pub fn unnamed(ty: TypeExpr) -> Self {
        Self { name: None, ty }
    }
}

/// A type expression.
///
/// The grammar is recursive: `list`, `option`, `result`, and `tuple`
/// nest arbitrarily (`list<option<result<string, errno>>>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// A built-in primitive type.
    Primitive(Primitive),
    /// A reference to a user-defined type by name.
    Named(EcoString),
    /// `list<ty>`
    List(Box<TypeExpr>),
    /// `option<ty>`
    Option(Box<TypeExpr>),
    /// `result`, `result<ok>`, `result<_, err>`, `result<ok, err>`.
    ///
    /// `_` in the ok position yields `ok: None`.
    Result {
        ok: Option<Box<TypeExpr>>,
        err: Option<Box<TypeExpr>>,
    },
    /// `tuple<ty, ..>`
    Tuple(Vec<TypeExpr>),
    /// Placeholder produced during error recovery.
    ///
    /// When a type expression fails to parse, the parser records a
    /// diagnostic and substitutes this so the surrounding node still
    /// exists.
    Error,
}

impl TypeExpr {
    /// Creates a `list<inner>` expression.
    #[must_use]
    pub fn list(inner: TypeExpr) -> Self {
        Self::List(Box::new(inner))
    }

    /// Creates an `option<inner>` expression.
    #[must_use]
    pub fn option(inner: TypeExpr) -> Self {
        Self::Option(Box::new(inner))
    }

    /// Creates a named type reference.
    #[must_use]
    pub fn named(name: impl Into<EcoString>) -> Self {
        Self::Named(name.into())
    }

    /// Returns `true` if this expression or any nested expression is the
    /// error placeholder.
    #[must_use]
    pub fn contains_error(&self) -> bool {
        match self {
            Self::Error => true,
            Self::Primitive(_) | Self::Named(_) => false,
            Self::List(inner) | Self::Option(inner) => inner.contains_error(),
            Self::Result { ok, err } => {
                ok.as_deref().is_some_and(Self::contains_error)
                    || err.as_deref().is_some_and(Self::contains_error)
            }
            Self::Tuple(items) => items.iter().any(Self::contains_error),
        }
    }
}

/// A built-in primitive type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Bool,
    Char,
    String,
    S8,
    S16,
    S32,
    S64,
    U8,
    U16,
    U32,
    U64,
    Float32,
    Float64,
}

impl std::fmt::Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Char => "char",
            Self::String => "string",
            Self::S8 => "s8",
            Self::S16 => "s16",
            Self::S32 => "s32",
            Self::S64 => "s64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
        };
        f.write_str(name)
    }
}
