//! Lowering of type annotations to interned types.
//!
//! Annotations name primitives (`bool`, `int`, `rational`, `float`, `str`),
//! sounds (`sound[T]`) and tuples (`(T, U)`). Anything else is an
//! [`LowerError`].

use cryss_diagnostic::{Diagnostic, ErrorCode};
use cryss_ir::{Param, Range, Stmt, StmtKind, TopLevel, TopLevelKind, TypeExpr, TypeExprKind};
use cryss_stack::ensure_sufficient_stack;
use thiserror::Error;
use tracing::debug;

use crate::{PrimitiveKind, TypeId, TypeInterner};

const SOUND: &str = "sound";

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LowerError {
    #[error("unknown type `{name}` at {range}")]
    UnknownType { name: String, range: Range },

    #[error("type `{name}` takes {expected} type argument(s) but {found} were given at {range}")]
    WrongTypeArity {
        name: String,
        expected: usize,
        found: usize,
        range: Range,
    },
}

impl LowerError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LowerError::UnknownType { .. } => ErrorCode::E2001,
            LowerError::WrongTypeArity { .. } => ErrorCode::E2002,
        }
    }

    pub fn range(&self) -> Range {
        match self {
            LowerError::UnknownType { range, .. } | LowerError::WrongTypeArity { range, .. } => {
                *range
            }
        }
    }

    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            LowerError::UnknownType { range, .. } => diag
                .with_label(*range, "not a known type")
                .with_note(
                    "annotations name `bool`, `int`, `rational`, `float`, `str`, `sound[T]` \
                     or a tuple of types",
                ),
            LowerError::WrongTypeArity {
                name,
                expected: 0,
                range,
                ..
            } => diag
                .with_label(*range, "takes no type arguments")
                .with_suggestion(format!("write `{name}`")),
            LowerError::WrongTypeArity {
                name,
                expected,
                range,
                ..
            } => diag
                .with_label(*range, format!("expected {expected} type argument(s)"))
                .with_suggestion(format!("write `{name}[T]`")),
        }
    }
}

/// Lower one annotation.
pub fn lower_type(ty: &TypeExpr, interner: &TypeInterner) -> Result<TypeId, LowerError> {
    ensure_sufficient_stack(|| match &ty.kind {
        TypeExprKind::Named(name) => match PrimitiveKind::from_name(name) {
            Some(kind) => Ok(interner.primitive(kind)),
            None if name == SOUND => Err(LowerError::WrongTypeArity {
                name: name.clone(),
                expected: 1,
                found: 0,
                range: ty.range,
            }),
            None => Err(LowerError::UnknownType {
                name: name.clone(),
                range: ty.range,
            }),
        },
        TypeExprKind::Applied { name, args } => {
            let arity = |expected| LowerError::WrongTypeArity {
                name: name.name.clone(),
                expected,
                found: args.len(),
                range: ty.range,
            };
            match (PrimitiveKind::from_name(&name.name), args.as_slice()) {
                (Some(kind), []) => Ok(interner.primitive(kind)),
                (Some(_), _) => Err(arity(0)),
                (None, [inner]) if name.name == SOUND => {
                    let inner = lower_type(inner, interner)?;
                    Ok(interner.sound(inner))
                }
                (None, _) if name.name == SOUND => Err(arity(1)),
                (None, _) => Err(LowerError::UnknownType {
                    name: name.name.clone(),
                    range: name.range,
                }),
            }
        }
        TypeExprKind::Tuple(elems) => {
            let ids = elems
                .iter()
                .map(|elem| lower_type(elem, interner))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(interner.tuple(&ids))
        }
    })
}

/// Types named by one top-level item.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ItemTypes {
    /// Every annotation in the item, in source order.
    pub annotations: Vec<(Range, TypeId)>,
    /// `(params) -> ret` of a definition whose parameters and return type
    /// are all annotated.
    pub signature: Option<TypeId>,
}

/// Lower every annotation in `item`, stopping at the first bad one.
pub fn lower_item_types(
    item: &TopLevel,
    interner: &TypeInterner,
) -> Result<ItemTypes, LowerError> {
    let mut lowerer = Lowerer {
        interner,
        annotations: Vec::new(),
    };
    let signature = match &item.kind {
        TopLevelKind::Stmt(stmt) => {
            lowerer.stmt(stmt)?;
            None
        }
        TopLevelKind::DefExpr {
            params, ret_type, ..
        } => lowerer.signature(params, ret_type.as_ref())?,
        TopLevelKind::DefBlock {
            params,
            ret_type,
            body,
            ..
        } => {
            let signature = lowerer.signature(params, ret_type.as_ref())?;
            for stmt in body {
                lowerer.stmt(stmt)?;
            }
            signature
        }
    };
    if let Some(signature) = signature {
        debug!(
            range = %item.range,
            signature = %interner.display(signature),
            "lowered signature"
        );
    }
    Ok(ItemTypes {
        annotations: lowerer.annotations,
        signature,
    })
}

struct Lowerer<'i> {
    interner: &'i TypeInterner,
    annotations: Vec<(Range, TypeId)>,
}

impl Lowerer<'_> {
    fn annotation(&mut self, ty: &TypeExpr) -> Result<TypeId, LowerError> {
        let id = lower_type(ty, self.interner)?;
        self.annotations.push((ty.range, id));
        Ok(id)
    }

    fn signature(
        &mut self,
        params: &[Param],
        ret_type: Option<&TypeExpr>,
    ) -> Result<Option<TypeId>, LowerError> {
        let mut param_ids = Some(Vec::with_capacity(params.len()));
        for param in params {
            match &param.ty {
                Some(ty) => {
                    let id = self.annotation(ty)?;
                    if let Some(ids) = &mut param_ids {
                        ids.push(id);
                    }
                }
                None => param_ids = None,
            }
        }
        let ret = ret_type.map(|ty| self.annotation(ty)).transpose()?;
        Ok(param_ids
            .zip(ret)
            .map(|(params, ret)| self.interner.function(&params, ret)))
    }

    fn stmt(&mut self, stmt: &Stmt) -> Result<(), LowerError> {
        ensure_sufficient_stack(|| match &stmt.kind {
            StmtKind::Decl { ty: Some(ty), .. } => self.annotation(ty).map(drop),
            StmtKind::Block(stmts) => stmts.iter().try_for_each(|s| self.stmt(s)),
            StmtKind::While { body, .. } => self.stmt(body),
            StmtKind::If { then, else_, .. } => {
                self.stmt(then)?;
                else_.as_deref().map_or(Ok(()), |s| self.stmt(s))
            }
            StmtKind::Decl { ty: None, .. }
            | StmtKind::Expr(_)
            | StmtKind::Break
            | StmtKind::Continue
            | StmtKind::Return(_) => Ok(()),
        })
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
