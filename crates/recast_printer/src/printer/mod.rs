//! The node renderer.
//!
//! [`Printer`] owns an [`OutputSink`] and renders any node reachable through
//! a [`NodeRef`]. Rendering rules live in one submodule per node family:
//!
//! - `module`: designs, design units and their directives
//! - `item`: module, generate and specify items
//! - `stmt`: procedural statements
//! - `expr`: expressions and expression-position nodes
//! - `misc`: identifier definitions and the small structural nodes
//! - `constant`: literals
//!
//! Every rule writes through the sink, which ignores writes once it has
//! failed, so a failed destination costs one walk of the tree and nothing
//! more.

mod constant;
mod expr;
mod item;
mod misc;
mod module;
mod stmt;

use crate::codes;
use crate::error::PrintError;
use crate::ident::write_identifier;
use crate::indent::{Indent, Layout};
use crate::output::OutputSink;
use crate::token::{spelling, token_spelling};
use recast_ast::{
    CaseItem, Constant, DataType, DelayOrEventControl, Design, Expr, GenerateCaseItem, IdDef,
    InstId, Module, ModuleItem, NetRegAssign, NodeList, Opaque, Path, Range, Statement, Strength,
    TokenId, VerilogToken,
};
use recast_common::{Ident, Interner};
use recast_config::{DiagnosticsConfig, FormatConfig, RecastConfig, UnhandledPolicy};
use recast_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink, NodeContext};
use std::io::{self, Write};

/// A borrowed reference to any renderable node.
#[derive(Clone, Copy, Debug)]
pub enum NodeRef<'t> {
    /// A whole design.
    Design(&'t Design),
    /// A design unit.
    Module(&'t Module),
    /// A module item.
    Item(&'t ModuleItem),
    /// A statement.
    Stmt(&'t Statement),
    /// An expression.
    Expr(&'t Expr),
    /// An identifier definition.
    IdDef(&'t IdDef),
    /// A literal.
    Constant(&'t Constant),
    /// A range, rendered without its brackets.
    Range(&'t Range),
    /// A data type.
    DataType(&'t DataType),
    /// A drive or charge strength.
    Strength(&'t Strength),
    /// A net or variable assignment.
    NetRegAssign(&'t NetRegAssign),
    /// An instance.
    InstId(&'t InstId),
    /// A procedural case item.
    CaseItem(&'t CaseItem),
    /// A generate case item.
    GenerateCaseItem(&'t GenerateCaseItem),
    /// A specify path.
    Path(&'t Path),
    /// An intra-assignment timing control.
    Control(&'t DelayOrEventControl),
}

macro_rules! node_ref_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl<'t> From<&'t $ty> for NodeRef<'t> {
                fn from(node: &'t $ty) -> Self {
                    NodeRef::$variant(node)
                }
            }
        )*
    };
}

node_ref_from! {
    Design(Design),
    Module(Module),
    Item(ModuleItem),
    Stmt(Statement),
    Expr(Expr),
    IdDef(IdDef),
    Constant(Constant),
    Range(Range),
    DataType(DataType),
    Strength(Strength),
    NetRegAssign(NetRegAssign),
    InstId(InstId),
    CaseItem(CaseItem),
    GenerateCaseItem(GenerateCaseItem),
    Path(Path),
    Control(DelayOrEventControl),
}

/// Renders syntax tree nodes as Verilog source text.
///
/// A printer is bound to one destination for its whole life. It may render a
/// single root or a sequence of top-level nodes into that destination; call
/// [`Printer::finish`] to flush and recover the writer.
pub struct Printer<'a, W: Write> {
    out: OutputSink<W>,
    interner: &'a Interner,
    diagnostics: &'a DiagnosticSink,
    layout: Layout,
    format: FormatConfig,
    policy: DiagnosticsConfig,
    /// Name of the design unit being rendered, for diagnostic context.
    unit: Option<String>,
    overflow_reported: bool,
    write_failure_reported: bool,
    denied: Option<String>,
}

impl<'a, W: Write> Printer<'a, W> {
    /// Creates a printer with the default configuration.
    pub fn new(out: OutputSink<W>, interner: &'a Interner, diagnostics: &'a DiagnosticSink) -> Self {
        let format = FormatConfig::default();
        Self {
            out,
            interner,
            diagnostics,
            layout: Layout::from(&format),
            format,
            policy: DiagnosticsConfig::default(),
            unit: None,
            overflow_reported: false,
            write_failure_reported: false,
            denied: None,
        }
    }

    /// Applies a loaded configuration.
    pub fn with_config(mut self, config: &RecastConfig) -> Self {
        self.layout = Layout::from(&config.format);
        self.format = config.format.clone();
        self.policy = config.diagnostics.clone();
        self
    }

    /// Returns `true` while output still reaches the destination.
    pub fn is_usable(&self) -> bool {
        self.out.is_usable()
    }

    /// Returns the output sink.
    pub fn sink(&self) -> &OutputSink<W> {
        &self.out
    }

    /// Renders `node` at the given nesting depth.
    ///
    /// The whole node is always visited. The result only reports whether the
    /// output is complete: `Err` means the destination is unusable (nothing
    /// or only part of the node was written), or that a node kind without a
    /// rendering rule was met under the `deny` policy. Callers that only
    /// care about best-effort output may ignore it.
    pub fn render<'t>(&mut self, node: impl Into<NodeRef<'t>>, indent: Indent) -> Result<(), PrintError> {
        if !self.out.is_usable() {
            return Err(PrintError::Unusable);
        }
        self.overflow_reported = false;
        self.denied = None;

        match node.into() {
            NodeRef::Design(design) => self.design(design, indent),
            NodeRef::Module(module) => self.module(module, indent),
            NodeRef::Item(item) => self.item(item, indent),
            NodeRef::Stmt(stmt) => self.stmt(stmt, indent),
            NodeRef::Expr(expr) => self.expr(expr, indent),
            NodeRef::IdDef(id) => self.id_def(id, indent),
            NodeRef::Constant(constant) => self.constant(constant),
            NodeRef::Range(range) => self.range(range, indent),
            NodeRef::DataType(data_type) => self.data_type(data_type, indent),
            NodeRef::Strength(strength) => self.strength(strength),
            NodeRef::NetRegAssign(assign) => self.net_reg_assign(assign, indent),
            NodeRef::InstId(inst) => self.inst_id(inst, indent),
            NodeRef::CaseItem(case_item) => self.case_item(case_item, indent),
            NodeRef::GenerateCaseItem(case_item) => self.generate_case_item(case_item, indent),
            NodeRef::Path(path) => self.path(path, indent),
            NodeRef::Control(control) => self.control(control, indent),
        }

        if let Some(error) = self.check_write_failure() {
            return Err(error);
        }
        match self.denied.take() {
            Some(kind) => Err(PrintError::Unhandled { kind }),
            None => Ok(()),
        }
    }

    /// Flushes the destination and returns the writer.
    pub fn finish(mut self) -> Result<W, PrintError> {
        self.out.flush();
        self.check_write_failure();
        self.out.finish()
    }

    /// Reports a write failure the first time it is seen and returns a copy
    /// of it.
    fn check_write_failure(&mut self) -> Option<PrintError> {
        let Some(PrintError::Write(error)) = self.out.failure() else {
            return None;
        };
        let copy = io::Error::new(error.kind(), error.to_string());
        if !self.write_failure_reported {
            self.write_failure_reported = true;
            self.diagnostics.emit(
                Diagnostic::error(codes::WRITE_FAILED, "failed to write output")
                    .with_note(copy.to_string())
                    .with_note("output after this point was discarded"),
            );
        }
        Some(PrintError::Write(copy))
    }

    // ------------------------------------------------------------------
    // Output primitives shared by every rendering rule
    // ------------------------------------------------------------------

    fn put(&mut self, text: &str) {
        self.out.write_str(text);
    }

    fn pad(&mut self, indent: Indent) {
        if self.layout.overflows(indent) && !self.overflow_reported {
            self.overflow_reported = true;
            if self.policy.indent_overflow.warns() {
                let message = format!(
                    "nesting depth {} needs {} columns of padding; capped at {}",
                    indent.depth(),
                    self.layout.width(indent),
                    self.layout.max_indent()
                );
                self.warn(codes::INDENT_OVERFLOW, message, "nested construct");
            }
        }
        let padding = self.layout.padding(indent);
        self.out.write_str(padding);
    }

    fn keyword(&mut self, token: VerilogToken) {
        self.out.write_str(spelling(token));
    }

    fn token(&mut self, id: TokenId) {
        let text = token_spelling(id);
        if text.is_empty() && !id.is_none() && self.policy.unhandled_nodes != UnhandledPolicy::Ignore {
            self.warn(
                codes::UNMAPPED_TOKEN,
                format!("token {id} has no spelling"),
                "token",
            );
        }
        self.out.write_str(text);
    }

    fn ident(&mut self, name: Ident) {
        match self.interner.try_resolve(name) {
            Some(text) => write_identifier(&mut self.out, text),
            None => self.unresolved(name),
        }
    }

    fn opt_ident(&mut self, name: Option<Ident>) {
        if let Some(name) = name {
            self.ident(name);
        }
    }

    /// Writes a system task or function name, which is never escaped.
    fn system_name(&mut self, name: Option<Ident>) {
        self.put("$");
        if let Some(name) = name {
            match self.interner.try_resolve(name) {
                Some(text) => self.out.write_str(text),
                None => self.unresolved(name),
            }
        }
    }

    fn unresolved(&mut self, name: Ident) {
        self.warn(
            codes::UNRESOLVED_IDENT,
            format!("identifier #{} is not in the symbol table", name.as_raw()),
            "identifier",
        );
    }

    // ------------------------------------------------------------------
    // Shared list shapes
    // ------------------------------------------------------------------

    fn opt_expr(&mut self, expr: &Option<Box<Expr>>, indent: Indent) {
        if let Some(expr) = expr {
            self.expr(expr, indent);
        }
    }

    /// Writes a positional list. Separators are counted by position, so an
    /// absent entry still occupies its slot.
    fn expr_list(&mut self, list: &NodeList<Expr>, separator: &str, indent: Indent) {
        for (i, expr) in list.iter().enumerate() {
            if i > 0 {
                self.put(separator);
            }
            if let Some(expr) = expr {
                self.expr(expr, indent);
            }
        }
    }

    /// Writes `(args)` when an argument list is present.
    fn args(&mut self, args: &Option<NodeList<Expr>>, indent: Indent) {
        if let Some(args) = args {
            self.put("(");
            self.expr_list(args, ",", indent);
            self.put(")");
        }
    }

    /// Writes `#(delays)` when a delay list is present.
    fn delay(&mut self, delay: &Option<NodeList<Expr>>, indent: Indent) {
        if let Some(delay) = delay {
            self.put("#(");
            self.expr_list(delay, ",", indent);
            self.put(")");
        }
    }

    /// Writes an event list, with an empty list meaning every input (`*`).
    fn event_list(&mut self, events: &NodeList<Expr>, indent: Indent) {
        if events.is_empty() {
            self.put("*");
        } else {
            self.expr_list(events, " or ", indent);
        }
    }

    // ------------------------------------------------------------------
    // Reporting
    // ------------------------------------------------------------------

    fn context(&self, node: impl Into<String>) -> NodeContext {
        let context = NodeContext::node(node);
        match &self.unit {
            Some(unit) => context.in_unit(unit.as_str()),
            None => context,
        }
    }

    fn warn(&self, code: DiagnosticCode, message: impl Into<String>, node: &str) {
        self.diagnostics
            .emit(Diagnostic::warning(code, message).with_context(self.context(node)));
    }

    /// Handles a node kind without a rendering rule. Nothing is written.
    fn unhandled(&mut self, family: &str, node: &Opaque) {
        let kind = format!("{family} `{}`", node.kind);
        match self.policy.unhandled_nodes {
            UnhandledPolicy::Ignore => {}
            UnhandledPolicy::Warn => {
                self.diagnostics.emit(
                    Diagnostic::warning(codes::UNHANDLED_NODE, format!("no rendering rule for {kind}"))
                        .with_context(self.context(family))
                        .with_note("the node was rendered as nothing"),
                );
            }
            UnhandledPolicy::Deny => {
                self.diagnostics.emit(
                    Diagnostic::error(codes::UNHANDLED_DENIED, format!("no rendering rule for {kind}"))
                        .with_context(self.context(family))
                        .with_help("set `unhandled_nodes = \"warn\"` to accept output with gaps"),
                );
                if self.denied.is_none() {
                    self.denied = Some(kind);
                }
            }
        }
    }
}

/// Renders `node` at the root depth into a string.
///
/// Returns the text together with every diagnostic raised while rendering.
pub fn render_to_string<'t>(
    node: impl Into<NodeRef<'t>>,
    interner: &Interner,
    config: &RecastConfig,
) -> (String, Vec<Diagnostic>) {
    let diagnostics = DiagnosticSink::new();
    let mut printer =
        Printer::new(OutputSink::new(Vec::new()), interner, &diagnostics).with_config(config);
    // The outcome is mirrored in the diagnostics.
    let _ = printer.render(node, Indent::ROOT);
    let bytes = printer.finish().unwrap_or_default();
    (String::from_utf8_lossy(&bytes).into_owned(), diagnostics.take_all())
}
