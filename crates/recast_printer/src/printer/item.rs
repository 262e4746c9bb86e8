//! Module items: declarations, instantiations, specify and generate
//! constructs.

use super::Printer;
use crate::indent::Indent;
use recast_ast::{
    ContinuousAssign, DataDecl, DefParam, FunctionDecl, GateInstantiation, GenVarAssign,
    GenerateBlock, GenerateCase, GenerateConditional, GenerateFor, IdDef, ModuleInstantiation,
    ModuleItem, NetDecl, NodeList, PathDecl, ProceduralConstruct, Statement, SystemTimingCheck,
    TaskDecl, TokenId, VerilogToken,
};
use std::io::Write;

/// Declaration kinds that print their keyword and end without a semicolon.
fn is_parameter_style(kind: TokenId) -> bool {
    matches!(
        kind.token(),
        Some(
            VerilogToken::Parameter
                | VerilogToken::Localparam
                | VerilogToken::Specparam
                | VerilogToken::Genvar
        )
    )
}

impl<W: Write> Printer<'_, W> {
    pub(super) fn item(&mut self, item: &ModuleItem, indent: Indent) {
        if !self.out.is_usable() {
            return;
        }
        match item {
            ModuleItem::DataDecl(decl) => {
                self.pad(indent);
                self.data_decl(decl, indent, true);
            }
            ModuleItem::NetDecl(decl) => self.net_decl(decl, indent),
            ModuleItem::FunctionDecl(decl) => self.function_decl(decl, indent),
            ModuleItem::TaskDecl(decl) => self.task_decl(decl, indent),
            ModuleItem::DefParam(defparam) => self.defparam(defparam, indent),
            ModuleItem::ContinuousAssign(assign) => self.continuous_assign(assign, indent),
            ModuleItem::GateInstantiation(gate) => self.gate_instantiation(gate, indent),
            ModuleItem::ModuleInstantiation(inst) => self.module_instantiation(inst, indent),
            ModuleItem::SpecifyBlock(block) => {
                self.pad(indent);
                self.put("specify\n");
                self.items(&block.items, indent.deeper());
                self.pad(indent);
                self.put("endspecify\n");
            }
            ModuleItem::PathDecl(decl) => self.path_decl(decl, indent),
            ModuleItem::SystemTimingCheck(check) => self.system_timing_check(check, indent),
            ModuleItem::Initial(construct) => {
                self.procedural(VerilogToken::Initial, construct, indent)
            }
            ModuleItem::Always(construct) => self.procedural(VerilogToken::Always, construct, indent),
            ModuleItem::GenerateConstruct(construct) => {
                self.pad(indent);
                self.put("generate\n");
                self.items(&construct.items, indent.deeper());
                self.pad(indent);
                self.put("endgenerate\n");
            }
            ModuleItem::GenerateConditional(cond) => self.generate_conditional(cond, indent),
            ModuleItem::GenerateCase(case) => self.generate_case(case, indent),
            ModuleItem::GenerateFor(generate) => self.generate_for(generate, indent),
            ModuleItem::GenerateBlock(block) => self.generate_block(block, indent),
            ModuleItem::Table(table) => {
                self.pad(indent);
                self.put("table\n");
                for entry in &table.entries {
                    self.pad(indent);
                    self.put(entry);
                    self.put(" ;\n");
                }
                self.pad(indent);
                self.put("endtable\n");
            }
            ModuleItem::Opaque(node) => self.unhandled("module item", node),
        }
    }

    pub(super) fn items(&mut self, items: &NodeList<ModuleItem>, indent: Indent) {
        for item in items.iter().flatten() {
            self.item(item, indent);
        }
    }

    /// Writes the present entries of `list`, one per line below the first.
    fn continued<T>(&mut self, list: &NodeList<T>, indent: Indent, mut render: impl FnMut(&mut Self, &T)) {
        for (i, entry) in list.iter().flatten().enumerate() {
            if i > 0 {
                self.put(",\n");
                self.pad(indent.deeper());
            }
            render(self, entry);
        }
    }

    /// Writes a data declaration without leading padding. With `terminate`
    /// unset the declaration is left open, as in a `for` header.
    pub(super) fn data_decl(&mut self, decl: &DataDecl, indent: Indent, terminate: bool) {
        if !decl.dir.is_none() {
            self.token(decl.dir);
            self.put(" ");
        }
        let parameter_style = is_parameter_style(decl.decl_kind);
        if parameter_style {
            self.token(decl.decl_kind);
            self.put(" ");
        }
        if let Some(data_type) = &decl.data_type {
            self.data_type(data_type, indent);
        }
        self.continued(&decl.ids, indent, |p, id| p.id_def(id, indent));
        if terminate {
            self.put(if parameter_style { "\n" } else { " ; \n" });
        }
    }

    fn net_decl(&mut self, decl: &NetDecl, indent: Indent) {
        self.pad(indent);
        self.token(decl.net_type);
        self.put(" ");
        if !decl.signing.is_none() {
            self.token(decl.signing);
            self.put(" ");
        }
        if let Some(strength) = &decl.strength {
            self.strength(strength);
        }
        if let Some(range) = &decl.range {
            self.put("[");
            self.range(range, indent);
            self.put("] ");
        }
        self.delay(&decl.delay, indent);
        for (i, id) in decl.ids.iter().flatten().enumerate() {
            if i > 0 {
                self.put(", ");
            }
            self.id_def(id, indent);
        }
        self.put(" ; \n");
    }

    fn function_decl(&mut self, decl: &FunctionDecl, indent: Indent) {
        self.pad(indent);
        self.put("function ");
        if decl.automatic {
            self.put("automatic ");
        }
        if let Some(data_type) = &decl.data_type {
            self.data_type(data_type, indent);
        }
        self.opt_id_def(&decl.id, indent);
        self.put(" ; \n");
        self.subprogram_body(&decl.decls, &decl.stmts, indent);
        self.pad(indent);
        self.put("endfunction\n");
    }

    fn task_decl(&mut self, decl: &TaskDecl, indent: Indent) {
        self.pad(indent);
        self.put("task ");
        if decl.automatic {
            self.put("automatic ");
        }
        self.opt_id_def(&decl.id, indent);
        self.put(" ; \n");
        self.subprogram_body(&decl.decls, &decl.stmts, indent);
        self.pad(indent);
        self.put("endtask\n");
    }

    fn subprogram_body(
        &mut self,
        decls: &NodeList<ModuleItem>,
        stmts: &Option<NodeList<Statement>>,
        indent: Indent,
    ) {
        self.items(decls, indent.deeper());
        match stmts {
            Some(stmts) => self.stmts(stmts, indent.deeper()),
            None if self.format.noop_bodies => {
                self.pad(indent.deeper());
                self.put("; // NOOP\n");
            }
            None => {}
        }
    }

    fn defparam(&mut self, defparam: &DefParam, indent: Indent) {
        self.pad(indent);
        self.put("defparam ");
        self.continued(&defparam.assigns, indent, |p, id| p.id_def(id, indent));
        self.put(" ; \n");
    }

    fn continuous_assign(&mut self, assign: &ContinuousAssign, indent: Indent) {
        self.pad(indent);
        self.put("assign ");
        if let Some(strength) = &assign.strength {
            self.strength(strength);
        }
        self.delay(&assign.delay, indent);
        self.continued(&assign.assigns, indent, |p, a| p.net_reg_assign(a, indent));
        self.put(" ; \n");
    }

    fn gate_instantiation(&mut self, gate: &GateInstantiation, indent: Indent) {
        self.pad(indent);
        self.token(gate.gate);
        self.put(" ");
        if let Some(strength) = &gate.strength {
            self.strength(strength);
        }
        self.delay(&gate.delay, indent);
        self.continued(&gate.instances, indent, |p, inst| p.inst_id(inst, indent));
        self.put(" ; \n");
    }

    fn module_instantiation(&mut self, inst: &ModuleInstantiation, indent: Indent) {
        self.pad(indent);
        self.opt_ident(inst.module_name);
        self.put(" ");
        if let Some(strength) = &inst.strength {
            self.strength(strength);
        }
        self.delay(&inst.params, indent);
        self.continued(&inst.instances, indent, |p, inst| p.inst_id(inst, indent));
        self.put(" ; \n");
    }

    fn path_decl(&mut self, decl: &PathDecl, indent: Indent) {
        self.pad(indent);
        if let Some(cond) = &decl.condition {
            self.put("if (");
            self.expr(cond, indent);
            self.put(") ");
        } else if decl.ifnone {
            self.put("ifnone ");
        }
        if let Some(path) = &decl.path {
            self.path(path, indent);
        }
        self.put("= (");
        self.expr_list(&decl.delays, ",", indent);
        self.put(") ; \n");
    }

    fn system_timing_check(&mut self, check: &SystemTimingCheck, indent: Indent) {
        self.pad(indent);
        self.system_name(check.name);
        self.put(" ");
        self.args(&check.args, indent);
        self.put(" ; \n");
    }

    fn procedural(&mut self, keyword: VerilogToken, construct: &ProceduralConstruct, indent: Indent) {
        self.pad(indent);
        self.keyword(keyword);
        self.put("\n");
        if let Some(stmt) = &construct.stmt {
            self.stmt(stmt, indent.deeper());
        }
    }

    fn generate_conditional(&mut self, cond: &GenerateConditional, indent: Indent) {
        self.pad(indent);
        self.put("if (");
        self.opt_expr(&cond.cond, indent);
        self.put(") \n");
        if let Some(item) = &cond.then_item {
            self.item(item, indent.deeper());
        }
        if let Some(item) = &cond.else_item {
            self.pad(indent);
            self.put("else\n");
            self.item(item, indent.deeper());
        }
    }

    fn generate_case(&mut self, case: &GenerateCase, indent: Indent) {
        self.pad(indent);
        self.case_keyword(case.style);
        self.put(" (");
        self.opt_expr(&case.cond, indent);
        self.put(")\n");
        for item in case.items.iter().flatten() {
            self.generate_case_item(item, indent.deeper());
        }
        self.pad(indent);
        self.put("endcase\n");
    }

    fn generate_for(&mut self, generate: &GenerateFor, indent: Indent) {
        self.pad(indent);
        self.put("for (");
        if let Some(init) = &generate.init {
            self.genvar_assign(init, indent);
        }
        self.put(" ; ");
        self.opt_expr(&generate.cond, indent);
        self.put(" ; ");
        if let Some(step) = &generate.step {
            self.genvar_assign(step, indent);
        }
        self.put(")\n");
        self.named_begin(&generate.block_id, indent);
        self.items(&generate.items, indent.deeper());
        self.pad(indent);
        self.put("end\n");
    }

    fn generate_block(&mut self, block: &GenerateBlock, indent: Indent) {
        self.named_begin(&block.block_id, indent);
        self.items(&block.items, indent.deeper());
        self.pad(indent);
        self.put("end\n");
    }

    fn named_begin(&mut self, label: &Option<IdDef>, indent: Indent) {
        self.pad(indent);
        self.put("begin");
        if let Some(label) = label {
            self.put(" : ");
            self.id_def(label, indent);
        }
        self.put("\n");
    }

    /// Writes `name = value` with no padding or terminator.
    pub(super) fn genvar_assign(&mut self, assign: &GenVarAssign, indent: Indent) {
        self.opt_ident(assign.name);
        self.put(" = ");
        self.opt_expr(&assign.value, indent);
    }

    fn opt_id_def(&mut self, id: &Option<IdDef>, indent: Indent) {
        if let Some(id) = id {
            self.id_def(id, indent);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::printer::render_to_string;
    use recast_ast::*;
    use recast_common::{Ident, Interner};
    use recast_config::RecastConfig;

    fn render(item: &ModuleItem, interner: &Interner) -> String {
        let (text, diags) = render_to_string(item, interner, &RecastConfig::default());
        assert!(diags.is_empty(), "{diags:?}");
        text
    }

    fn plain(name: Ident) -> Option<IdDef> {
        Some(IdDef::Plain { name: Some(name) })
    }

    #[test]
    fn data_decl_with_multiple_ids_continues_lines() {
        let interner = Interner::new();
        let a = interner.get_or_intern("a");
        let b = interner.get_or_intern("b");
        let decl = ModuleItem::DataDecl(DataDecl {
            dir: VerilogToken::Output.id(),
            data_type: Some(DataType {
                ty: VerilogToken::Reg.id(),
                ..DataType::default()
            }),
            ids: vec![plain(a), None, plain(b)],
            ..DataDecl::default()
        });
        assert_eq!(render(&decl, &interner), "output reg a,\n    b ; \n");
    }

    #[test]
    fn parameter_decl_has_no_semicolon() {
        let interner = Interner::new();
        let n = interner.get_or_intern("N");
        let decl = ModuleItem::DataDecl(DataDecl {
            decl_kind: VerilogToken::Localparam.id(),
            ids: vec![Some(IdDef::Param {
                name: Some(n),
                init: Expr::int(4).boxed(),
            })],
            ..DataDecl::default()
        });
        assert_eq!(render(&decl, &interner), "localparam N = 4\n");
    }

    #[test]
    fn net_decl_with_range_and_delay() {
        let interner = Interner::new();
        let w = interner.get_or_intern("w");
        let v = interner.get_or_intern("v");
        let decl = ModuleItem::NetDecl(NetDecl {
            net_type: VerilogToken::Wire.id(),
            signing: VerilogToken::Signed.id(),
            range: Some(Range::new(Expr::int(3), Expr::int(0))),
            delay: Some(vec![Some(Expr::int(2))]),
            ids: vec![plain(w), plain(v)],
            ..NetDecl::default()
        });
        assert_eq!(render(&decl, &interner), "wire signed [3:0] #(2)w, v ; \n");
    }

    #[test]
    fn net_decl_with_strength() {
        let interner = Interner::new();
        let w = interner.get_or_intern("w");
        let decl = ModuleItem::NetDecl(NetDecl {
            net_type: VerilogToken::Tri.id(),
            strength: Some(Strength {
                lval: VerilogToken::Strong0.id(),
                rval: VerilogToken::Weak1.id(),
            }),
            ids: vec![plain(w)],
            ..NetDecl::default()
        });
        assert_eq!(render(&decl, &interner), "tri (strong0,weak1)w ; \n");
    }

    #[test]
    fn function_without_body_gets_noop_marker() {
        let interner = Interner::new();
        let f = interner.get_or_intern("f");
        let decl = ModuleItem::FunctionDecl(FunctionDecl {
            automatic: true,
            data_type: Some(DataType {
                ty: VerilogToken::Integer.id(),
                ..DataType::default()
            }),
            id: Some(IdDef::Function { name: Some(f) }),
            ..FunctionDecl::default()
        });
        assert_eq!(
            render(&decl, &interner),
            "function automatic integer f ; \n    ; // NOOP\nendfunction\n"
        );

        let mut config = RecastConfig::default();
        config.format.noop_bodies = false;
        let (text, _) = render_to_string(&decl, &interner, &config);
        assert_eq!(text, "function automatic integer f ; \nendfunction\n");
    }

    #[test]
    fn task_with_declarations_and_body() {
        let interner = Interner::new();
        let t = interner.get_or_intern("t");
        let x = interner.get_or_intern("x");
        let decl = ModuleItem::TaskDecl(TaskDecl {
            automatic: false,
            id: Some(IdDef::Task { name: Some(t) }),
            decls: vec![Some(ModuleItem::DataDecl(DataDecl {
                dir: VerilogToken::Input.id(),
                ids: vec![plain(x)],
                ..DataDecl::default()
            }))],
            stmts: Some(vec![Some(Statement::Null)]),
        });
        assert_eq!(
            render(&decl, &interner),
            "task t ; \n    input x ; \n    ;\nendtask\n"
        );
    }

    #[test]
    fn continuous_assign_lists_assignments() {
        let interner = Interner::new();
        let y = interner.get_or_intern("y");
        let z = interner.get_or_intern("z");
        let assign = |lhs: Ident, rhs: i64| NetRegAssign {
            lval: Expr::id(lhs).boxed(),
            rval: Expr::int(rhs).boxed(),
        };
        let item = ModuleItem::ContinuousAssign(ContinuousAssign {
            strength: None,
            delay: Some(vec![Some(Expr::int(1))]),
            assigns: vec![Some(assign(y, 0)), Some(assign(z, 1))],
        });
        assert_eq!(
            render(&item, &interner),
            "assign #(1)y = 0,\n    z = 1 ; \n"
        );
    }

    #[test]
    fn gate_instantiation() {
        let interner = Interner::new();
        let g1 = interner.get_or_intern("g1");
        let [o, a, b] = ["o", "a", "b"].map(|n| interner.get_or_intern(n));
        let item = ModuleItem::GateInstantiation(GateInstantiation {
            gate: VerilogToken::Nand.id(),
            instances: vec![Some(InstId {
                name: Some(g1),
                range: None,
                ports: vec![Some(Expr::id(o)), Some(Expr::id(a)), Some(Expr::id(b))],
            })],
            ..GateInstantiation::default()
        });
        assert_eq!(render(&item, &interner), "nand g1 (o, a, b) ; \n");
    }

    #[test]
    fn module_instantiation_with_named_ports() {
        let interner = Interner::new();
        let sub = interner.get_or_intern("sub");
        let u1 = interner.get_or_intern("u1");
        let clk = interner.get_or_intern("clk");
        let item = ModuleItem::ModuleInstantiation(ModuleInstantiation {
            module_name: Some(sub),
            strength: None,
            params: Some(vec![Some(Expr::int(8))]),
            instances: vec![Some(InstId {
                name: Some(u1),
                range: None,
                ports: vec![
                    Some(Expr::PortConnect {
                        formal: Some(clk),
                        connection: Expr::id(clk).boxed(),
                    }),
                    Some(Expr::PortOpen),
                ],
            })],
        });
        assert_eq!(
            render(&item, &interner),
            "sub #(8)u1 (.clk(clk), ) ; \n"
        );
    }

    #[test]
    fn escaped_instance_name_keeps_its_terminator() {
        let interner = Interner::new();
        let sub = interner.get_or_intern("sub");
        let name = interner.get_or_intern("u[0]");
        let item = ModuleItem::ModuleInstantiation(ModuleInstantiation {
            module_name: Some(sub),
            instances: vec![Some(InstId {
                name: Some(name),
                ..InstId::default()
            })],
            ..ModuleInstantiation::default()
        });
        assert_eq!(render(&item, &interner), "sub \\u[0]  () ; \n");
    }

    #[test]
    fn defparam_assignments() {
        let interner = Interner::new();
        let p = interner.get_or_intern("u1 WIDTH");
        let item = ModuleItem::DefParam(DefParam {
            assigns: vec![Some(IdDef::Param {
                name: Some(p),
                init: Expr::int(16).boxed(),
            })],
        });
        assert_eq!(render(&item, &interner), "defparam u1.WIDTH = 16 ; \n");
    }

    #[test]
    fn specify_block_with_path_and_timing_check() {
        let interner = Interner::new();
        let [a, y, clk, d] = ["a", "y", "clk", "d"].map(|n| interner.get_or_intern(n));
        let setup = interner.get_or_intern("setup");
        let item = ModuleItem::SpecifyBlock(SpecifyBlock {
            items: vec![
                Some(ModuleItem::PathDecl(PathDecl {
                    condition: None,
                    ifnone: false,
                    path: Some(Path {
                        inputs: vec![Some(Expr::id(a))],
                        connection: VerilogToken::EqualsGreater.id(),
                        outputs: vec![Some(Expr::id(y))],
                        ..Path::default()
                    }),
                    delays: vec![Some(Expr::int(1)), Some(Expr::int(2))],
                })),
                Some(ModuleItem::SystemTimingCheck(SystemTimingCheck {
                    name: Some(setup),
                    args: Some(vec![
                        Some(Expr::id(d)),
                        Some(Expr::TimingCheckEvent {
                            edge: VerilogToken::Posedge.id(),
                            edge_desc: None,
                            terminal: Expr::id(clk).boxed(),
                            condition: None,
                        }),
                        Some(Expr::int(3)),
                    ]),
                })),
            ],
        });
        assert_eq!(
            render(&item, &interner),
            "specify\n    (a => y) = (1,2) ; \n    $setup (d,posedge clk,3) ; \nendspecify\n"
        );
    }

    #[test]
    fn ifnone_path() {
        let interner = Interner::new();
        let [a, y] = ["a", "y"].map(|n| interner.get_or_intern(n));
        let item = ModuleItem::PathDecl(PathDecl {
            condition: None,
            ifnone: true,
            path: Some(Path {
                inputs: vec![Some(Expr::id(a))],
                connection: VerilogToken::StarGreater.id(),
                outputs: vec![Some(Expr::id(y))],
                ..Path::default()
            }),
            delays: vec![Some(Expr::int(5))],
        });
        assert_eq!(render(&item, &interner), "ifnone (a *> y) = (5) ; \n");
    }

    #[test]
    fn generate_for_uses_unterminated_assignments() {
        let interner = Interner::new();
        let i = interner.get_or_intern("i");
        let gen = interner.get_or_intern("gen");
        let item = ModuleItem::GenerateConstruct(GenerateConstruct {
            items: vec![Some(ModuleItem::GenerateFor(GenerateFor {
                init: Some(GenVarAssign {
                    name: Some(i),
                    value: Expr::int(0).boxed(),
                }),
                cond: Expr::binary(VerilogToken::LessThan, Expr::id(i), Expr::int(4)).boxed(),
                step: Some(GenVarAssign {
                    name: Some(i),
                    value: Expr::binary(VerilogToken::Plus, Expr::id(i), Expr::int(1)).boxed(),
                }),
                block_id: Some(IdDef::Block { name: Some(gen) }),
                items: Vec::new(),
            }))],
        });
        assert_eq!(
            render(&item, &interner),
            "generate\n    for (i = 0 ; (i < 4) ; i = (i + 1))\n    begin : gen\n    end\nendgenerate\n"
        );
    }

    #[test]
    fn generate_conditional_and_case() {
        let interner = Interner::new();
        let w = interner.get_or_intern("W");
        let blk = |label: &str| {
            ModuleItem::GenerateBlock(GenerateBlock {
                block_id: Some(IdDef::Block {
                    name: Some(interner.get_or_intern(label)),
                }),
                items: Vec::new(),
            })
        };

        let cond = ModuleItem::GenerateConditional(GenerateConditional {
            cond: Expr::id(w).boxed(),
            then_item: Some(Box::new(blk("wide"))),
            else_item: Some(Box::new(blk("narrow"))),
        });
        assert_eq!(
            render(&cond, &interner),
            "if (W) \n    begin : wide\n    end\nelse\n    begin : narrow\n    end\n"
        );

        let case = ModuleItem::GenerateCase(GenerateCase {
            style: VerilogToken::Case.id(),
            cond: Expr::id(w).boxed(),
            items: vec![
                Some(GenerateCaseItem {
                    conditions: Some(vec![Some(Expr::int(1)), Some(Expr::int(2))]),
                    item: Some(Box::new(blk("small"))),
                }),
                Some(GenerateCaseItem {
                    conditions: None,
                    item: None,
                }),
            ],
        });
        assert_eq!(
            render(&case, &interner),
            "case (W)\n    1, 2 : \n        begin : small\n        end\n    default : \n        ; \nendcase\n"
        );
    }

    #[test]
    fn initial_and_table() {
        let interner = Interner::new();
        let initial = ModuleItem::Initial(ProceduralConstruct {
            stmt: Some(Box::new(Statement::Null)),
        });
        assert_eq!(render(&initial, &interner), "initial\n    ;\n");

        let table = ModuleItem::Table(Table {
            entries: vec!["0 1 : 1".to_owned(), "1 ? : 0".to_owned()],
        });
        assert_eq!(
            render(&table, &interner),
            "table\n0 1 : 1 ;\n1 ? : 0 ;\nendtable\n"
        );
    }
}
