// Copyright 2026 the witkit authors
// SPDX-License-Identifier: Apache-2.0

//! Declaration productions: worlds, interfaces, type definitions,
//! resources, and function signatures.
//!
//! Every brace-delimited body here shares the same recovery posture: a
//! stray token inside the body records an error and skips one token, so a
//! single typo cannot swallow the rest of the block.

use ecow::EcoString;

use super::Parser;
use crate::ast::{
    Case, ExternItem, ExternKind, ExternPath, Field, FuncItem, FuncType, InterfaceDecl,
    InterfaceItems, Param, ResourceMethod, TypeDef, TypeDefKind, UseAlias, UseDecl, WorldDecl,
};
use crate::source_analysis::TokenKind;

impl Parser<'_> {
    /// `world name '{' (import-item | export-item)* '}'`
    pub(super) fn parse_world(&mut self) -> Option<WorldDecl> {
        self.advance(); // `world`
        let name = self.expect_identifier("a world name")?;
        self.expect(&TokenKind::LeftBrace, "`{`")?;

        let mut imports = Vec::new();
        let mut exports = Vec::new();
        loop {
            match self.current.kind() {
                TokenKind::RightBrace => {
                    self.advance();
                    break;
                }
                TokenKind::Eof => {
                    self.error_expected("`}`");
                    return None;
                }
                TokenKind::Import => {
                    self.advance();
                    match self.parse_extern_item() {
                        Some(item) => imports.push(item),
                        None => self.recover_in_body(),
                    }
                }
                TokenKind::Export => {
                    self.advance();
                    match self.parse_extern_item() {
                        Some(item) => exports.push(item),
                        None => self.recover_in_body(),
                    }
                }
                TokenKind::Error(_) => self.advance(),
                _ => {
                    self.error_expected("`import`, `export`, or `}`");
                    self.advance();
                }
            }
        }

        Some(WorldDecl {
            name,
            imports,
            exports,
        })
    }

    /// The payload of an `import`/`export` item. Four forms:
    ///
    /// ```text
    /// import my-iface                          bare sibling reference
    /// import log: func(msg: string)            function type
    /// import host: interface { .. }            inline interface
    /// import wasi:http/types@0.2.0             qualified path
    /// ```
    ///
    /// In the qualified form the leading identifier doubles as both the
    /// item name and the path namespace.
    fn parse_extern_item(&mut self) -> Option<ExternItem> {
        let name = self.expect_identifier("an item name")?;
        if !self.check(&TokenKind::Colon) {
            return Some(ExternItem { name, kind: None });
        }
        self.advance(); // `:`

        let kind = match self.current.kind() {
            TokenKind::Func => ExternKind::Func(self.parse_func_type()?),
            TokenKind::Interface => {
                self.advance();
                self.expect(&TokenKind::LeftBrace, "`{`")?;
                ExternKind::Interface(self.parse_interface_items()?)
            }
            TokenKind::Identifier(_) => {
                let package = self.expect_identifier("a package name")?;
                self.expect(&TokenKind::Slash, "`/`")?;
                let interface = self.expect_identifier("an interface name")?;
                let version = if self.check(&TokenKind::At) {
                    self.advance();
                    Some(self.parse_semver()?)
                } else {
                    None
                };
                ExternKind::Path(ExternPath {
                    namespace: name.clone(),
                    package,
                    interface,
                    version,
                })
            }
            _ => {
                self.error_expected("`func`, `interface`, or a package path");
                return None;
            }
        };

        Some(ExternItem {
            name,
            kind: Some(kind),
        })
    }

    /// `interface name '{' items '}'`
    pub(super) fn parse_interface(&mut self) -> Option<InterfaceDecl> {
        self.advance(); // `interface`
        let name = self.expect_identifier("an interface name")?;
        self.expect(&TokenKind::LeftBrace, "`{`")?;
        let items = self.parse_interface_items()?;
        Some(InterfaceDecl { name, items })
    }

    /// The declarations of an interface body, consuming the closing `}`.
    ///
    /// The opening `{` has already been consumed by the caller (this is
    /// shared between named interfaces and inline ones in world items).
    fn parse_interface_items(&mut self) -> Option<InterfaceItems> {
        let mut items = InterfaceItems::default();
        loop {
            match self.current.kind() {
                TokenKind::RightBrace => {
                    self.advance();
                    return Some(items);
                }
                TokenKind::Eof => {
                    self.error_expected("`}`");
                    return None;
                }
                TokenKind::Use => match self.parse_use_alias() {
                    Some(alias) => items.uses.push(alias),
                    None => self.recover_in_body(),
                },
                TokenKind::Type
                | TokenKind::Record
                | TokenKind::Variant
                | TokenKind::Union
                | TokenKind::Enum
                | TokenKind::Flags
                | TokenKind::Resource => match self.parse_typedef() {
                    Some(typedef) => items.typedefs.push(typedef),
                    None => self.recover_in_body(),
                },
                // `name: func(..)` - the colon lookahead keeps a stray
                // identifier from being misread as a function item.
                TokenKind::Identifier(_) if self.peek_check(&TokenKind::Colon) => {
                    match self.parse_func_item() {
                        Some(func) => items.funcs.push(func),
                        None => self.recover_in_body(),
                    }
                }
                TokenKind::Error(_) => self.advance(),
                _ => {
                    self.error_expected("an interface item or `}`");
                    self.advance();
                }
            }
        }
    }

    /// `use iface '.' '{' name '}'` as a top-level clause.
    pub(super) fn parse_top_use(&mut self) -> Option<UseDecl> {
        let (interface, name) = self.parse_use_parts()?;
        Some(UseDecl { interface, name })
    }

    /// `use iface '.' '{' name '}'` inside an interface body.
    fn parse_use_alias(&mut self) -> Option<UseAlias> {
        let (interface, name) = self.parse_use_parts()?;
        Some(UseAlias { interface, name })
    }

    /// Only the single-name form is supported; a comma after the name is
    /// rejected where the closing `}` is expected.
    fn parse_use_parts(&mut self) -> Option<(EcoString, EcoString)> {
        self.advance(); // `use`
        let interface = self.expect_identifier("an interface name")?;
        self.expect(&TokenKind::Period, "`.`")?;
        self.expect(&TokenKind::LeftBrace, "`{`")?;
        let name = self.expect_identifier("a name to use")?;
        self.expect(&TokenKind::RightBrace, "`}`")?;
        Some((interface, name))
    }

    /// Dispatches on the typedef keyword at `current`.
    fn parse_typedef(&mut self) -> Option<TypeDef> {
        match self.current.kind() {
            TokenKind::Type => {
                self.advance();
                let name = self.expect_identifier("a type name")?;
                self.expect(&TokenKind::Equal, "`=`")?;
                let ty = self.parse_type_expr();
                Some(TypeDef {
                    name,
                    kind: TypeDefKind::Alias(ty),
                })
            }
            TokenKind::Record => {
                self.advance();
                let name = self.expect_identifier("a record name")?;
                let fields = self.brace_list(Self::parse_field)?;
                Some(TypeDef {
                    name,
                    kind: TypeDefKind::Record(fields),
                })
            }
            TokenKind::Variant => {
                self.advance();
                let name = self.expect_identifier("a variant name")?;
                let cases = self.brace_list(Self::parse_case)?;
                Some(TypeDef {
                    name,
                    kind: TypeDefKind::Variant(cases),
                })
            }
            TokenKind::Union => {
                self.advance();
                let name = self.expect_identifier("a union name")?;
                let types = self.brace_list(|p| Some(p.parse_type_expr()))?;
                Some(TypeDef {
                    name,
                    kind: TypeDefKind::Union(types),
                })
            }
            TokenKind::Enum => {
                self.advance();
                let name = self.expect_identifier("an enum name")?;
                let cases = self.brace_list(|p| p.expect_identifier("a case name"))?;
                Some(TypeDef {
                    name,
                    kind: TypeDefKind::Enum(cases),
                })
            }
            TokenKind::Flags => {
                self.advance();
                let name = self.expect_identifier("a flags name")?;
                let flags = self.brace_list(|p| p.expect_identifier("a flag name"))?;
                Some(TypeDef {
                    name,
                    kind: TypeDefKind::Flags(flags),
                })
            }
            TokenKind::Resource => self.parse_resource(),
            _ => {
                self.error_expected("a type definition");
                None
            }
        }
    }

    /// `resource name '{' (constructor | method | static method)* '}'`
    ///
    /// Resource items are not comma separated. A constructor has a
    /// parameter list but never a result list.
    fn parse_resource(&mut self) -> Option<TypeDef> {
        self.advance(); // `resource`
        let name = self.expect_identifier("a resource name")?;
        self.expect(&TokenKind::LeftBrace, "`{`")?;

        let mut methods = Vec::new();
        loop {
            match self.current.kind() {
                TokenKind::RightBrace => {
                    self.advance();
                    break;
                }
                TokenKind::Eof => {
                    self.error_expected("`}`");
                    return None;
                }
                TokenKind::Constructor => {
                    self.advance();
                    match self.parse_param_list() {
                        Some(params) => methods.push(ResourceMethod::Constructor(params)),
                        None => self.recover_in_body(),
                    }
                }
                TokenKind::Identifier(_) => match self.parse_resource_method() {
                    Some(method) => methods.push(method),
                    None => self.recover_in_body(),
                },
                TokenKind::Error(_) => self.advance(),
                _ => {
                    self.error_expected("a resource item or `}`");
                    self.advance();
                }
            }
        }

        Some(TypeDef {
            name,
            kind: TypeDefKind::Resource(methods),
        })
    }

    /// `name ':' ('static')? func-type`
    fn parse_resource_method(&mut self) -> Option<ResourceMethod> {
        let name = self.expect_identifier("a method name")?;
        self.expect(&TokenKind::Colon, "`:`")?;
        let is_static = if self.check(&TokenKind::Static) {
            self.advance();
            true
        } else {
            false
        };
        let func = self.parse_func_type()?;
        Some(if is_static {
            ResourceMethod::Static { name, func }
        } else {
            ResourceMethod::Method { name, func }
        })
    }

    /// `name ':' func-type`
    fn parse_func_item(&mut self) -> Option<FuncItem> {
        let name = self.expect_identifier("a function name")?;
        self.expect(&TokenKind::Colon, "`:`")?;
        let func = self.parse_func_type()?;
        Some(FuncItem { name, func })
    }

    /// `func '(' params ')' ('->' (ty | '(' results ')'))?`
    fn parse_func_type(&mut self) -> Option<FuncType> {
        self.expect(&TokenKind::Func, "`func`")?;
        let params = self.parse_param_list()?;
        let results = if self.check(&TokenKind::Arrow) {
            self.advance();
            if self.check(&TokenKind::LeftParen) {
                self.parse_param_list()?
            } else {
                vec![Param::unnamed(self.parse_type_expr())]
            }
        } else {
            Vec::new()
        };
        Some(FuncType { params, results })
    }

    /// `'(' (name ':' ty),* ')'` with a trailing comma tolerated.
    fn parse_param_list(&mut self) -> Option<Vec<Param>> {
        self.expect(&TokenKind::LeftParen, "`(`")?;
        let mut params = Vec::new();
        loop {
            if self.check(&TokenKind::RightParen) {
                self.advance();
                return Some(params);
            }
            if self.current.kind().is_eof() {
                self.error_expected("`)`");
                return None;
            }
            let name = self.expect_identifier("a parameter name")?;
            self.expect(&TokenKind::Colon, "`:`")?;
            params.push(Param::named(name, self.parse_type_expr()));
            if self.check(&TokenKind::Comma) {
                self.advance();
            } else if !self.check(&TokenKind::RightParen) {
                self.error_expected("`,` or `)`");
                return None;
            }
        }
    }

    /// `field ':' ty`
    fn parse_field(&mut self) -> Option<Field> {
        let name = self.expect_identifier("a field name")?;
        self.expect(&TokenKind::Colon, "`:`")?;
        Some(Field {
            name,
            ty: self.parse_type_expr(),
        })
    }

    /// `case ('(' ty ')')?`
    fn parse_case(&mut self) -> Option<Case> {
        let name = self.expect_identifier("a case name")?;
        let payload = if self.check(&TokenKind::LeftParen) {
            self.advance();
            let ty = self.parse_type_expr();
            self.expect(&TokenKind::RightParen, "`)`")?;
            Some(ty)
        } else {
            None
        };
        Some(Case { name, payload })
    }

    /// A brace-delimited, comma-separated item list with a trailing comma
    /// tolerated. The opening `{` has not been consumed yet.
    fn brace_list<T>(&mut self, mut item: impl FnMut(&mut Self) -> Option<T>) -> Option<Vec<T>> {
        self.expect(&TokenKind::LeftBrace, "`{`")?;
        let mut items = Vec::new();
        loop {
            if self.check(&TokenKind::RightBrace) {
                self.advance();
                return Some(items);
            }
            if self.current.kind().is_eof() {
                self.error_expected("`}`");
                return None;
            }
            if self.current.kind().is_error() {
                self.advance();
                continue;
            }
            if let Some(value) = item(self) {
                items.push(value);
                if self.check(&TokenKind::Comma) {
                    self.advance();
                } else if !self.check(&TokenKind::RightBrace) {
                    self.error_expected("`,` or `}`");
                    self.recover_in_body();
                }
            } else {
                self.recover_in_body();
            }
        }
    }

    /// Skips one token unless sitting on a body boundary, so item-level
    /// recovery cannot eat the closing `}` or run past the end of input.
    fn recover_in_body(&mut self) {
        if !self.check(&TokenKind::RightBrace) && !self.current.kind().is_eof() {
            self.advance();
        }
    }
}
