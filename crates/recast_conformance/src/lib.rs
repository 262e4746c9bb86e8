//! Conformance test helpers for the Recast Verilog unparser.
//!
//! Provides a [`Tree`] builder that constructs syntax trees over a shared
//! [`Interner`], and pipeline functions that render a tree and return the
//! text together with structured diagnostic results for assertion in
//! integration tests.

#![warn(missing_docs)]

use recast_ast::{
    Assignment, Block, BitVector, CaseItem, Constant, DataDecl, DataType, Design, Document,
    DocumentError, Expr, IdDef, InstId, Module, ModuleInstantiation, ModuleItem, NetDecl,
    NetRegAssign, ProceduralConstruct, Range, Statement, TokenId, VerilogToken,
};
use recast_common::{Ident, Interner};
use recast_config::{ConfigError, RecastConfig};
use recast_diagnostics::{Diagnostic, Severity};
use recast_printer::NodeRef;

/// Result of rendering a node through the printer.
pub struct PrintResult {
    /// The rendered source text.
    pub text: String,
    /// All diagnostics emitted while rendering.
    pub diagnostics: Vec<Diagnostic>,
    /// Whether any errors were emitted.
    pub has_errors: bool,
    /// Number of error-severity diagnostics.
    pub error_count: usize,
    /// Number of warning-severity diagnostics.
    pub warning_count: usize,
}

impl PrintResult {
    /// Returns `true` if a diagnostic with the given code (e.g. `"W101"`) was
    /// emitted.
    pub fn has_code(&self, code: &str) -> bool {
        self.diagnostics.iter().any(|d| d.code.to_string() == code)
    }
}

/// Parses a `recast.toml` body into a configuration.
pub fn make_config(toml: &str) -> Result<RecastConfig, ConfigError> {
    recast_config::load_config_from_str(toml)
}

/// Renders `node` at the root depth with the given configuration.
pub fn print_node<'t>(
    node: impl Into<NodeRef<'t>>,
    interner: &Interner,
    config: &RecastConfig,
) -> PrintResult {
    let (text, diagnostics) = recast_printer::render_to_string(node, interner, config);
    let error_count = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    let warning_count = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .count();
    PrintResult {
        text,
        has_errors: error_count > 0,
        error_count,
        warning_count,
        diagnostics,
    }
}

/// Renders a whole design with the default configuration.
pub fn print_design(tree: &Tree, design: &Design) -> PrintResult {
    print_node(design, &tree.interner, &RecastConfig::default())
}

/// Serializes a design into the JSON interchange document and reads it back,
/// the way a front-end hands trees to the CLI.
pub fn through_document(tree: &Tree, design: &Design) -> Result<(Interner, Design), DocumentError> {
    let json = Document::from_parts(&tree.interner, design.clone()).to_json()?;
    Document::from_json(&json)?.into_parts()
}

/// Builds syntax trees whose names share one interner.
#[derive(Default)]
pub struct Tree {
    /// The interner every name is resolved through.
    pub interner: Interner,
}

impl Tree {
    /// Creates a builder with an empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a name.
    pub fn name(&self, name: &str) -> Ident {
        self.interner.get_or_intern(name)
    }

    /// An identifier reference.
    pub fn id(&self, name: &str) -> Expr {
        Expr::id(self.name(name))
    }

    /// A plain identifier definition.
    pub fn def(&self, name: &str) -> Option<IdDef> {
        Some(IdDef::Plain {
            name: Some(self.name(name)),
        })
    }

    /// A design holding the given units in order.
    pub fn design(&self, modules: Vec<Module>) -> Design {
        Design {
            modules: modules.into_iter().map(Some).collect(),
        }
    }

    /// A module with a non-ANSI port list.
    pub fn module(&self, name: &str, ports: &[&str], items: Vec<ModuleItem>) -> Module {
        Module {
            id: Some(IdDef::Module {
                name: Some(self.name(name)),
            }),
            ports: Some(ports.iter().map(|p| Some(self.id(p))).collect()),
            items: items.into_iter().map(Some).collect(),
            ..Module::default()
        }
    }

    /// A port or variable declaration such as `input [3:0] a`.
    pub fn decl(&self, dir: VerilogToken, ty: Option<VerilogToken>, width: u32, names: &[&str]) -> ModuleItem {
        let data_type = (ty.is_some() || width > 1).then(|| DataType {
            ty: ty.map_or(TokenId::NONE, TokenId::from),
            signing: TokenId::NONE,
            dims: (width > 1).then(|| msb_range(width)),
        });
        ModuleItem::DataDecl(DataDecl {
            dir: dir.id(),
            decl_kind: TokenId::NONE,
            data_type,
            ids: names.iter().map(|n| self.def(n)).collect(),
        })
    }

    /// A `reg` declaration with no direction.
    pub fn reg(&self, width: u32, names: &[&str]) -> ModuleItem {
        ModuleItem::DataDecl(DataDecl {
            data_type: Some(DataType {
                ty: VerilogToken::Reg.id(),
                signing: TokenId::NONE,
                dims: (width > 1).then(|| msb_range(width)),
            }),
            ids: names.iter().map(|n| self.def(n)).collect(),
            ..DataDecl::default()
        })
    }

    /// A `parameter` declaration.
    pub fn parameter(&self, name: &str, value: Expr) -> ModuleItem {
        ModuleItem::DataDecl(DataDecl {
            decl_kind: VerilogToken::Parameter.id(),
            ids: vec![Some(IdDef::Param {
                name: Some(self.name(name)),
                init: value.boxed(),
            })],
            ..DataDecl::default()
        })
    }

    /// A `wire` declaration.
    pub fn wire(&self, width: u32, names: &[&str]) -> ModuleItem {
        ModuleItem::NetDecl(NetDecl {
            net_type: VerilogToken::Wire.id(),
            range: (width > 1).then(|| msb_range(width)),
            ids: names.iter().map(|n| self.def(n)).collect(),
            ..NetDecl::default()
        })
    }

    /// A continuous assignment `assign lhs = rhs`.
    pub fn assign(&self, lhs: &str, rhs: Expr) -> ModuleItem {
        ModuleItem::ContinuousAssign(recast_ast::ContinuousAssign {
            strength: None,
            delay: None,
            assigns: vec![Some(NetRegAssign {
                lval: self.id(lhs).boxed(),
                rval: rhs.boxed(),
            })],
        })
    }

    /// An `always @(events) stmt` block.
    pub fn always(&self, events: Vec<Expr>, stmt: Statement) -> ModuleItem {
        ModuleItem::Always(ProceduralConstruct {
            stmt: Some(Box::new(Statement::EventControl {
                at: Some(events.into_iter().map(Some).collect()),
                stmt: Some(Box::new(stmt)),
            })),
        })
    }

    /// A `posedge` event on a named signal.
    pub fn posedge(&self, name: &str) -> Expr {
        Expr::event(VerilogToken::Posedge, self.id(name))
    }

    /// A blocking assignment.
    pub fn blocking(&self, lhs: &str, rhs: Expr) -> Statement {
        Statement::BlockingAssign(self.assignment(lhs, rhs))
    }

    /// A non-blocking assignment.
    pub fn nonblocking(&self, lhs: &str, rhs: Expr) -> Statement {
        Statement::NonBlockingAssign(self.assignment(lhs, rhs))
    }

    fn assignment(&self, lhs: &str, rhs: Expr) -> Assignment {
        Assignment {
            lval: self.id(lhs).boxed(),
            control: None,
            value: rhs.boxed(),
        }
    }

    /// An unlabelled `begin ... end` block.
    pub fn begin(&self, stmts: Vec<Statement>) -> Statement {
        Statement::SeqBlock(Block {
            label: None,
            decls: Vec::new(),
            stmts: stmts.into_iter().map(Some).collect(),
        })
    }

    /// An `if` statement with an optional `else`.
    pub fn if_else(&self, cond: Expr, then_stmt: Statement, else_stmt: Option<Statement>) -> Statement {
        Statement::Conditional {
            cond: cond.boxed(),
            then_stmt: Some(Box::new(then_stmt)),
            else_stmt: else_stmt.map(Box::new),
        }
    }

    /// A `case` statement; an arm with no labels is the `default` arm.
    pub fn case(&self, subject: Expr, arms: Vec<(Vec<Expr>, Statement)>) -> Statement {
        Statement::Case {
            style: VerilogToken::Case.id(),
            cond: subject.boxed(),
            items: arms
                .into_iter()
                .map(|(labels, stmt)| {
                    Some(CaseItem {
                        conditions: (!labels.is_empty())
                            .then(|| labels.into_iter().map(Some).collect()),
                        stmt: Some(Box::new(stmt)),
                    })
                })
                .collect(),
            full_case: false,
            parallel_case: false,
        }
    }

    /// A module instance with named port connections.
    pub fn instance(&self, module: &str, name: &str, ports: &[(&str, &str)]) -> ModuleItem {
        ModuleItem::ModuleInstantiation(ModuleInstantiation {
            module_name: Some(self.name(module)),
            strength: None,
            params: None,
            instances: vec![Some(InstId {
                name: Some(self.name(name)),
                range: None,
                ports: ports
                    .iter()
                    .map(|(formal, actual)| {
                        Some(Expr::PortConnect {
                            formal: Some(self.name(formal)),
                            connection: self.id(actual).boxed(),
                        })
                    })
                    .collect(),
            })],
        })
    }
}

/// A sized binary literal.
pub fn sized(width: u32, value: u64) -> Expr {
    Expr::Const(Constant::Bits(BitVector::from_u64(width, value)))
}

/// The range `[width-1:0]`.
pub fn msb_range(width: u32) -> Range {
    Range::new(
        Expr::int(i64::from(width.saturating_sub(1))),
        Expr::int(0),
    )
}
