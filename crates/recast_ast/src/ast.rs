//! Node types of the elaborated syntax tree.
//!
//! Every child link is optional: the front-end may leave any child absent and
//! the printer renders an absent child as nothing. Lists are therefore
//! [`NodeList`]s whose entries may themselves be absent. A list whose own
//! absence changes the output (a port list, a task body, an event list) is
//! wrapped in one more `Option`.
//!
//! Node kinds the printer has no rendering rule for are carried as
//! [`Opaque`] variants in [`ModuleItem`], [`Statement`], [`Expr`],
//! [`IdDef`] and [`Constant`].

use crate::token::TokenId;
use recast_common::Ident;
use serde::{Deserialize, Serialize};

/// An ordered list of children, any of which may be absent.
pub type NodeList<T> = Vec<Option<T>>;

/// A node kind produced by the front-end that has no rendering rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Opaque {
    /// The front-end's name for the node kind, used in diagnostics.
    pub kind: String,
}

impl Opaque {
    /// Creates an opaque node of the given kind.
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

// ============================================================================
// Design units
// ============================================================================

/// A fully elaborated design: every design unit to print, in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Design {
    /// The design units.
    pub modules: NodeList<Module>,
}

/// Which keyword pair opens and closes a design unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitKind {
    /// `module` ... `endmodule`
    #[default]
    Module,
    /// `macromodule` ... `endmodule`
    Macromodule,
    /// `primitive` ... `endprimitive`
    Primitive,
}

/// Compiler directives in effect for a design unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Directives {
    /// The `` `default_nettype `` token, or [`TokenId::NONE`].
    pub default_net_type: TokenId,
    /// Whether the unit is surrounded by `` `celldefine ``.
    pub cell_define: bool,
    /// The `` `unconnected_drive `` token (`pull0`/`pull1`), or [`TokenId::NONE`].
    pub unconnected_drive: TokenId,
    /// The `` `timescale `` argument text, e.g. `"1ns/1ps"`.
    pub timescale: Option<String>,
}

/// A module, macromodule or primitive declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Module {
    /// The unit keyword.
    pub kind: UnitKind,
    /// Directives printed around the unit.
    pub directives: Directives,
    /// The unit name, an [`IdDef::Module`] or [`IdDef::Udp`].
    pub id: Option<IdDef>,
    /// The `#( ... )` parameter port list, absent when the unit has none.
    pub params: Option<NodeList<ModuleItem>>,
    /// The port list, absent when the unit has none.
    pub ports: Option<NodeList<Expr>>,
    /// The unit body.
    pub items: NodeList<ModuleItem>,
}

// ============================================================================
// Module items
// ============================================================================

/// An item in a module body, a generate region or a specify block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModuleItem {
    /// Port, variable, parameter, genvar or event declaration.
    DataDecl(DataDecl),
    /// Net declaration.
    NetDecl(NetDecl),
    /// `function` ... `endfunction`
    FunctionDecl(FunctionDecl),
    /// `task` ... `endtask`
    TaskDecl(TaskDecl),
    /// `defparam` ...
    DefParam(DefParam),
    /// `assign` ...
    ContinuousAssign(ContinuousAssign),
    /// Primitive gate instantiation.
    GateInstantiation(GateInstantiation),
    /// Module or primitive instantiation.
    ModuleInstantiation(ModuleInstantiation),
    /// `specify` ... `endspecify`
    SpecifyBlock(SpecifyBlock),
    /// Specify path declaration.
    PathDecl(PathDecl),
    /// System timing check such as `$setup`.
    SystemTimingCheck(SystemTimingCheck),
    /// `initial` construct.
    Initial(ProceduralConstruct),
    /// `always` construct.
    Always(ProceduralConstruct),
    /// `generate` ... `endgenerate`
    GenerateConstruct(GenerateConstruct),
    /// Generate `if`.
    GenerateConditional(GenerateConditional),
    /// Generate `case`.
    GenerateCase(GenerateCase),
    /// Generate `for`.
    GenerateFor(GenerateFor),
    /// Named or unnamed generate block.
    GenerateBlock(GenerateBlock),
    /// Primitive truth table.
    Table(Table),
    /// An item kind without a rendering rule.
    Opaque(Opaque),
}

/// A declaration of ports, variables, parameters, genvars or events.
///
/// Parameter-style declarations (`parameter`, `localparam`, `specparam`)
/// carry their keyword in `decl_kind`; ports carry their direction in `dir`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataDecl {
    /// Port direction token, or [`TokenId::NONE`].
    pub dir: TokenId,
    /// Declaration keyword (`parameter`, `localparam`, `specparam`, `genvar`),
    /// or [`TokenId::NONE`].
    pub decl_kind: TokenId,
    /// Declared type.
    pub data_type: Option<DataType>,
    /// The declared identifiers.
    pub ids: NodeList<IdDef>,
}

/// A net declaration such as `wire [7:0] a, b ;`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetDecl {
    /// Net type token (`wire`, `tri`, `supply0`, ...).
    pub net_type: TokenId,
    /// Signing token, or [`TokenId::NONE`].
    pub signing: TokenId,
    /// Drive or charge strength.
    pub strength: Option<Strength>,
    /// Packed range.
    pub range: Option<Range>,
    /// `#( ... )` delay list, absent when the declaration has no delay.
    pub delay: Option<NodeList<Expr>>,
    /// The declared nets.
    pub ids: NodeList<IdDef>,
}

/// A function declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionDecl {
    /// Whether the function is `automatic`.
    pub automatic: bool,
    /// Return type.
    pub data_type: Option<DataType>,
    /// Function name, an [`IdDef::Function`].
    pub id: Option<IdDef>,
    /// Port and local declarations.
    pub decls: NodeList<ModuleItem>,
    /// Body statements, absent for an empty body.
    pub stmts: Option<NodeList<Statement>>,
}

/// A task declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskDecl {
    /// Whether the task is `automatic`.
    pub automatic: bool,
    /// Task name, an [`IdDef::Task`].
    pub id: Option<IdDef>,
    /// Port and local declarations.
    pub decls: NodeList<ModuleItem>,
    /// Body statements, absent for an empty body.
    pub stmts: Option<NodeList<Statement>>,
}

/// A `defparam` item. Each entry is an [`IdDef::Param`] whose name is the
/// hierarchical path of the overridden parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefParam {
    /// The parameter overrides.
    pub assigns: NodeList<IdDef>,
}

/// A continuous assignment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContinuousAssign {
    /// Drive strength.
    pub strength: Option<Strength>,
    /// `#( ... )` delay list.
    pub delay: Option<NodeList<Expr>>,
    /// The assignments.
    pub assigns: NodeList<NetRegAssign>,
}

/// A primitive gate instantiation such as `nand #(2) g1 (y, a, b) ;`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateInstantiation {
    /// Gate type token (`and`, `bufif0`, `pullup`, ...).
    pub gate: TokenId,
    /// Drive strength.
    pub strength: Option<Strength>,
    /// `#( ... )` delay list.
    pub delay: Option<NodeList<Expr>>,
    /// The gate instances.
    pub instances: NodeList<InstId>,
}

/// A module or user-defined primitive instantiation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleInstantiation {
    /// Name of the instantiated unit.
    pub module_name: Option<Ident>,
    /// Drive strength (primitive instances only).
    pub strength: Option<Strength>,
    /// `#( ... )` parameter value assignments.
    pub params: Option<NodeList<Expr>>,
    /// The instances.
    pub instances: NodeList<InstId>,
}

/// A `specify` block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecifyBlock {
    /// Specparams, path declarations and timing checks.
    pub items: NodeList<ModuleItem>,
}

/// A specify path declaration such as `(a => y) = (1, 2) ;`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathDecl {
    /// State-dependent path condition.
    pub condition: Option<Box<Expr>>,
    /// Whether the path is an `ifnone` path.
    pub ifnone: bool,
    /// The path description.
    pub path: Option<Path>,
    /// Path delay values.
    pub delays: NodeList<Expr>,
}

/// A system timing check such as `$setup(d, posedge clk, 2) ;`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemTimingCheck {
    /// Check name without the leading `$`.
    pub name: Option<Ident>,
    /// Check arguments.
    pub args: Option<NodeList<Expr>>,
}

/// The body of an `initial` or `always` construct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProceduralConstruct {
    /// The controlled statement.
    pub stmt: Option<Box<Statement>>,
}

/// A `generate` region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConstruct {
    /// Items inside the region.
    pub items: NodeList<ModuleItem>,
}

/// A generate `if` with an optional `else`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConditional {
    /// Condition.
    pub cond: Option<Box<Expr>>,
    /// Item generated when the condition holds.
    pub then_item: Option<Box<ModuleItem>>,
    /// Item generated otherwise.
    pub else_item: Option<Box<ModuleItem>>,
}

/// A generate `case`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateCase {
    /// Case keyword token (`case`, `casex`, `casez`).
    pub style: TokenId,
    /// Case expression.
    pub cond: Option<Box<Expr>>,
    /// Case items.
    pub items: NodeList<GenerateCaseItem>,
}

/// A generate `for` loop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateFor {
    /// Loop initialization.
    pub init: Option<GenVarAssign>,
    /// Loop condition.
    pub cond: Option<Box<Expr>>,
    /// Loop step.
    pub step: Option<GenVarAssign>,
    /// Label of the loop body block, an [`IdDef::Block`].
    pub block_id: Option<IdDef>,
    /// Items in the loop body.
    pub items: NodeList<ModuleItem>,
}

/// A generate block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateBlock {
    /// Block label, an [`IdDef::Block`].
    pub block_id: Option<IdDef>,
    /// Items in the block.
    pub items: NodeList<ModuleItem>,
}

/// A user-defined primitive truth table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Table {
    /// Table rows as written, e.g. `"0 1 : 1"`.
    pub entries: Vec<String>,
}

// ============================================================================
// Statements
// ============================================================================

/// A procedural statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// `lval = value ;`
    BlockingAssign(Assignment),
    /// `lval <= value ;`
    NonBlockingAssign(Assignment),
    /// Genvar assignment inside a generate loop.
    GenVarAssign(GenVarAssign),
    /// `assign lval = value ;` (procedural continuous assignment)
    Assign {
        /// The assignment.
        assign: Option<NetRegAssign>,
    },
    /// `deassign lval ;`
    Deassign {
        /// The target.
        lval: Option<Box<Expr>>,
    },
    /// `force lval = value ;`
    Force {
        /// The assignment.
        assign: Option<NetRegAssign>,
    },
    /// `release lval ;`
    Release {
        /// The target.
        lval: Option<Box<Expr>>,
    },
    /// User task call.
    TaskEnable {
        /// Task name, usually an [`Expr::IdRef`] or [`Expr::SelectedName`].
        name: Option<Box<Expr>>,
        /// Arguments, absent for a call without parentheses.
        #[serde(default)]
        args: Option<NodeList<Expr>>,
    },
    /// System task call such as `$display(...)`.
    SystemTaskEnable {
        /// Task name without the leading `$`.
        name: Option<Ident>,
        /// Arguments, absent for a call without parentheses.
        #[serde(default)]
        args: Option<NodeList<Expr>>,
    },
    /// `# delay stmt`
    DelayControl {
        /// The delay value.
        delay: Option<Box<Expr>>,
        /// The delayed statement.
        stmt: Option<Box<Statement>>,
    },
    /// `@( events ) stmt`
    EventControl {
        /// The event list. An empty list means `@*`.
        #[serde(default)]
        at: Option<NodeList<Expr>>,
        /// The controlled statement.
        stmt: Option<Box<Statement>>,
    },
    /// `if ( cond ) then_stmt [ else else_stmt ]`
    Conditional {
        /// Condition.
        cond: Option<Box<Expr>>,
        /// Statement executed when the condition holds.
        then_stmt: Option<Box<Statement>>,
        /// Statement executed otherwise.
        else_stmt: Option<Box<Statement>>,
    },
    /// `case`, `casex` or `casez`.
    Case {
        /// Case keyword token.
        style: TokenId,
        /// Case expression.
        cond: Option<Box<Expr>>,
        /// Case items.
        #[serde(default)]
        items: NodeList<CaseItem>,
        /// Synthesis `full_case` attribute.
        #[serde(default)]
        full_case: bool,
        /// Synthesis `parallel_case` attribute.
        #[serde(default)]
        parallel_case: bool,
    },
    /// `forever stmt`
    Forever {
        /// The repeated statement.
        stmt: Option<Box<Statement>>,
    },
    /// `repeat ( count ) stmt`
    Repeat {
        /// Repetition count.
        count: Option<Box<Expr>>,
        /// The repeated statement.
        stmt: Option<Box<Statement>>,
    },
    /// `while ( cond ) stmt`
    While {
        /// Loop condition.
        cond: Option<Box<Expr>>,
        /// Loop body.
        stmt: Option<Box<Statement>>,
    },
    /// `for ( initials ; cond ; repetitions ) stmt`
    For {
        /// Loop initializations.
        #[serde(default)]
        initials: NodeList<ForInit>,
        /// Loop condition.
        cond: Option<Box<Expr>>,
        /// Loop step assignments.
        #[serde(default)]
        repetitions: NodeList<Assignment>,
        /// Loop body.
        stmt: Option<Box<Statement>>,
    },
    /// `wait ( cond ) stmt`
    Wait {
        /// Wait condition.
        cond: Option<Box<Expr>>,
        /// Statement executed once the condition holds.
        stmt: Option<Box<Statement>>,
    },
    /// `disable target ;`
    Disable {
        /// The disabled task or block.
        target: Option<Box<Expr>>,
    },
    /// `-> event ;`
    EventTrigger {
        /// The triggered event.
        event: Option<Box<Expr>>,
    },
    /// `begin` ... `end`
    SeqBlock(Block),
    /// `fork` ... `join`
    ParBlock(Block),
    /// `;`
    Null,
    /// A statement kind without a rendering rule.
    Opaque(Opaque),
}

/// A blocking or non-blocking assignment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assignment {
    /// Assignment target.
    pub lval: Option<Box<Expr>>,
    /// Intra-assignment timing control.
    pub control: Option<DelayOrEventControl>,
    /// Assigned value.
    pub value: Option<Box<Expr>>,
}

/// A genvar assignment such as `i = i + 1`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenVarAssign {
    /// The assigned genvar.
    pub name: Option<Ident>,
    /// Assigned value.
    pub value: Option<Box<Expr>>,
}

/// One initialization of a procedural `for` loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ForInit {
    /// A loop-local declaration.
    Decl(DataDecl),
    /// An assignment to an existing variable.
    Assign(Assignment),
}

/// A sequential or parallel block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Block {
    /// Block label, an [`IdDef::Block`].
    pub label: Option<IdDef>,
    /// Block-local declarations.
    pub decls: NodeList<ModuleItem>,
    /// Block statements.
    pub stmts: NodeList<Statement>,
}

// ============================================================================
// Expressions
// ============================================================================

/// An expression, or an expression-position node such as a port connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// A reference to a named object.
    IdRef {
        /// Referenced name.
        name: Option<Ident>,
    },
    /// `prefix[index]`, where `index` may be a [`Expr::Range`].
    IndexedId {
        /// Indexed object.
        prefix: Option<Box<Expr>>,
        /// Index or range.
        index: Option<Box<Expr>>,
    },
    /// `prefix.suffix`
    SelectedName {
        /// Selected object.
        prefix: Option<Box<Expr>>,
        /// Selected member.
        suffix: Option<Ident>,
    },
    /// `prefix[i][j]...`
    IndexedMemoryId {
        /// Indexed memory.
        prefix: Option<Box<Expr>>,
        /// Indexes, outermost first.
        #[serde(default)]
        indexes: NodeList<Expr>,
    },
    /// `{a,b,c}`
    Concat {
        /// Concatenated expressions.
        #[serde(default)]
        exprs: NodeList<Expr>,
    },
    /// `{n{a,b}}`
    MultiConcat {
        /// Replication count.
        repeat: Option<Box<Expr>>,
        /// Replicated expressions.
        #[serde(default)]
        exprs: NodeList<Expr>,
    },
    /// User function call.
    FunctionCall {
        /// Function name.
        name: Option<Box<Expr>>,
        /// Arguments.
        #[serde(default)]
        args: Option<NodeList<Expr>>,
    },
    /// System function call such as `$clog2(n)`.
    SystemFunctionCall {
        /// Function name without the leading `$`.
        name: Option<Ident>,
        /// Arguments.
        #[serde(default)]
        args: Option<NodeList<Expr>>,
    },
    /// `min:typ:max`
    MinTypMax {
        /// Minimum value.
        min: Option<Box<Expr>>,
        /// Typical value.
        typ: Option<Box<Expr>>,
        /// Maximum value.
        max: Option<Box<Expr>>,
    },
    /// Unary operator application.
    Unary {
        /// Operator token.
        op: TokenId,
        /// Operand.
        arg: Option<Box<Expr>>,
    },
    /// Binary operator application.
    Binary {
        /// Operator token.
        op: TokenId,
        /// Left operand.
        left: Option<Box<Expr>>,
        /// Right operand.
        right: Option<Box<Expr>>,
    },
    /// `cond ? then_expr : else_expr`
    QuestionColon {
        /// Condition.
        cond: Option<Box<Expr>>,
        /// Value when the condition holds.
        then_expr: Option<Box<Expr>>,
        /// Value otherwise.
        else_expr: Option<Box<Expr>>,
    },
    /// One entry of an event list, with an optional edge.
    Event {
        /// Edge token (`posedge`, `negedge`), or [`TokenId::NONE`].
        #[serde(default)]
        edge: TokenId,
        /// Watched expression.
        expr: Option<Box<Expr>>,
    },
    /// `.formal(connection)`
    PortConnect {
        /// Formal port name.
        formal: Option<Ident>,
        /// Connected expression.
        connection: Option<Box<Expr>>,
    },
    /// An unconnected positional port.
    PortOpen,
    /// ANSI-style port declaration inside a module header.
    AnsiPortDecl(AnsiPortDecl),
    /// Timing-check event such as `posedge clk &&& en`.
    TimingCheckEvent {
        /// Edge token, or [`TokenId::NONE`].
        #[serde(default)]
        edge: TokenId,
        /// Edge descriptor text, e.g. `"01, 10"`.
        edge_desc: Option<String>,
        /// The checked terminal.
        terminal: Option<Box<Expr>>,
        /// `&&&` condition.
        condition: Option<Box<Expr>>,
    },
    /// A bit range or part-select.
    Range(Range),
    /// A literal.
    Const(Constant),
    /// An expression kind without a rendering rule.
    Opaque(Opaque),
}

/// An ANSI-style port declaration such as `input wire [7:0] a, b`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnsiPortDecl {
    /// Port direction token.
    pub dir: TokenId,
    /// Port type.
    pub data_type: Option<DataType>,
    /// Declared ports.
    pub ids: NodeList<IdDef>,
}

/// A range `left:right`, an indexed part-select `base+:width`, or a chain of
/// unpacked dimensions `[a:b][c:d]` linked through `next`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Range {
    /// Left bound or base.
    pub left: Option<Box<Expr>>,
    /// Part-select token (`+:`, `-:`), or [`TokenId::NONE`] for a plain `:`.
    pub part_select: TokenId,
    /// Right bound or width.
    pub right: Option<Box<Expr>>,
    /// The next dimension.
    pub next: Option<Box<Range>>,
}

impl Expr {
    /// Creates a reference to `name`.
    pub fn id(name: Ident) -> Self {
        Expr::IdRef { name: Some(name) }
    }

    /// Creates a unary operator application.
    pub fn unary(op: impl Into<TokenId>, arg: Expr) -> Self {
        Expr::Unary {
            op: op.into(),
            arg: Some(Box::new(arg)),
        }
    }

    /// Creates a binary operator application.
    pub fn binary(op: impl Into<TokenId>, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op: op.into(),
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    /// Creates an unsized integer literal.
    pub fn int(value: i64) -> Self {
        Expr::Const(Constant::Int(value))
    }

    /// Creates an event list entry.
    pub fn event(edge: impl Into<TokenId>, expr: Expr) -> Self {
        Expr::Event {
            edge: edge.into(),
            expr: Some(Box::new(expr)),
        }
    }

    /// Wraps the expression for use as an optional boxed child.
    pub fn boxed(self) -> Option<Box<Expr>> {
        Some(Box::new(self))
    }
}

impl Range {
    /// Creates a plain `left:right` range.
    pub fn new(left: Expr, right: Expr) -> Self {
        Self {
            left: left.boxed(),
            right: right.boxed(),
            ..Self::default()
        }
    }
}

// ============================================================================
// Identifier definitions
// ============================================================================

/// The defining occurrence of a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IdDef {
    /// A port or net name without dimensions or initializer.
    Plain {
        /// The defined name.
        name: Option<Ident>,
    },
    /// A variable or net with optional unpacked dimensions and initializer.
    Variable {
        /// The defined name.
        name: Option<Ident>,
        /// Unpacked dimensions.
        #[serde(default)]
        dims: Option<Range>,
        /// Initial value.
        #[serde(default)]
        init: Option<Box<Expr>>,
    },
    /// A parameter, or a `defparam` target, with its value.
    Param {
        /// The defined name.
        name: Option<Ident>,
        /// Parameter value.
        #[serde(default)]
        init: Option<Box<Expr>>,
    },
    /// A module name.
    Module {
        /// The defined name.
        name: Option<Ident>,
    },
    /// A user-defined primitive name.
    Udp {
        /// The defined name.
        name: Option<Ident>,
    },
    /// A task name.
    Task {
        /// The defined name.
        name: Option<Ident>,
    },
    /// A function name.
    Function {
        /// The defined name.
        name: Option<Ident>,
    },
    /// A genvar name.
    Genvar {
        /// The defined name.
        name: Option<Ident>,
    },
    /// A block label.
    Block {
        /// The defined name.
        name: Option<Ident>,
    },
    /// An identifier kind without a rendering rule.
    Opaque(Opaque),
}

impl IdDef {
    /// Returns the defined name, if any.
    pub fn name(&self) -> Option<Ident> {
        match self {
            IdDef::Plain { name }
            | IdDef::Variable { name, .. }
            | IdDef::Param { name, .. }
            | IdDef::Module { name }
            | IdDef::Udp { name }
            | IdDef::Task { name }
            | IdDef::Function { name }
            | IdDef::Genvar { name }
            | IdDef::Block { name } => *name,
            IdDef::Opaque(_) => None,
        }
    }
}

// ============================================================================
// Shared structural nodes
// ============================================================================

/// A declared type: keyword, signing and packed range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataType {
    /// Type keyword (`reg`, `wire`, `integer`, ...), or [`TokenId::NONE`].
    pub ty: TokenId,
    /// Signing keyword, or [`TokenId::NONE`].
    pub signing: TokenId,
    /// Packed dimensions.
    pub dims: Option<Range>,
}

/// A drive strength pair `(strong0, weak1)` or a charge strength `(small)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Strength {
    /// First strength token.
    pub lval: TokenId,
    /// Second strength token, or [`TokenId::NONE`] for a charge strength.
    pub rval: TokenId,
}

/// A net or variable assignment `lval = rval`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetRegAssign {
    /// Assignment target.
    pub lval: Option<Box<Expr>>,
    /// Assigned value.
    pub rval: Option<Box<Expr>>,
}

/// An instance within a module or gate instantiation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstId {
    /// Instance name; gates may be unnamed.
    pub name: Option<Ident>,
    /// Instance array range.
    pub range: Option<Range>,
    /// Port connections.
    pub ports: NodeList<Expr>,
}

/// One item of a procedural `case`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseItem {
    /// Item labels; absent for the `default` item.
    pub conditions: Option<NodeList<Expr>>,
    /// Selected statement.
    pub stmt: Option<Box<Statement>>,
}

/// One item of a generate `case`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateCaseItem {
    /// Item labels; absent for the `default` item.
    pub conditions: Option<NodeList<Expr>>,
    /// Generated item.
    pub item: Option<Box<ModuleItem>>,
}

/// A specify path description such as `(posedge clk => (q +: d))`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Path {
    /// Edge token, or [`TokenId::NONE`].
    pub edge: TokenId,
    /// Path inputs.
    pub inputs: NodeList<Expr>,
    /// Polarity token (`+`, `-`), or [`TokenId::NONE`].
    pub polarity: TokenId,
    /// Connection token (`=>`, `*>`).
    pub connection: TokenId,
    /// Path outputs.
    pub outputs: NodeList<Expr>,
    /// Edge-sensitive data source.
    pub data_source: Option<Box<Expr>>,
}

/// Intra-assignment timing control: `#delay`, `@(events)` or
/// `repeat (n) @(events)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelayOrEventControl {
    /// Delay value.
    pub delay: Option<Box<Expr>>,
    /// Repetition count.
    pub repeat: Option<Box<Expr>>,
    /// Event list. An empty list means `@*`.
    pub events: Option<NodeList<Expr>>,
}

// ============================================================================
// Constants
// ============================================================================

/// A literal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Constant {
    /// A sized or based number stored as bit planes.
    Bits(BitVector),
    /// A string literal, stored with its surrounding quotes.
    Str {
        /// The literal text as written.
        image: String,
    },
    /// An unsized decimal integer.
    Int(i64),
    /// A real number.
    Real(f64),
    /// A literal kind without a rendering rule.
    Opaque(Opaque),
}

/// A sized four-state number.
///
/// Each plane is little-endian packed: bit `b` is `(plane[b / 8] >> (b % 8)) & 1`.
/// An absent plane means "all zero". At each bit position `x` wins over `z`,
/// which wins over the `value` plane.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BitVector {
    /// Declared width in bits.
    pub size: u32,
    /// Whether the literal carries the `s` base modifier.
    pub signed: bool,
    /// Value plane.
    pub value: Option<Vec<u8>>,
    /// Unknown plane.
    pub x: Option<Vec<u8>>,
    /// High-impedance plane.
    pub z: Option<Vec<u8>>,
}

impl BitVector {
    /// Creates a two-state vector holding the low `size` bits of `value`,
    /// zero-extended when `size` exceeds 64.
    pub fn from_u64(size: u32, value: u64) -> Self {
        let mut plane = vec![0u8; size.div_ceil(8) as usize];
        let low = plane.len().min(8);
        plane[..low].copy_from_slice(&value.to_le_bytes()[..low]);
        Self {
            size,
            signed: false,
            value: Some(plane),
            x: None,
            z: None,
        }
    }

    /// Creates a vector from a binary image such as `"10xz"`, most
    /// significant bit first. Returns `None` if the image contains a
    /// character other than `0`, `1`, `x`, `z` or `?` (either case).
    pub fn from_binary(image: &str) -> Option<Self> {
        let size = image.chars().count();
        let bytes = size.div_ceil(8);
        let mut value = vec![0u8; bytes];
        let mut x = vec![0u8; bytes];
        let mut z = vec![0u8; bytes];
        for (bit, c) in image.chars().rev().enumerate() {
            let mask = 1u8 << (bit % 8);
            match c {
                '0' => {}
                '1' => value[bit / 8] |= mask,
                'x' | 'X' => x[bit / 8] |= mask,
                'z' | 'Z' | '?' => z[bit / 8] |= mask,
                _ => return None,
            }
        }
        let nonzero = |plane: Vec<u8>| plane.iter().any(|&b| b != 0).then_some(plane);
        Some(Self {
            size: u32::try_from(size).ok()?,
            signed: false,
            value: Some(value),
            x: nonzero(x),
            z: nonzero(z),
        })
    }

    /// Marks the vector as signed.
    pub fn signed(mut self) -> Self {
        self.signed = true;
        self
    }
}
