//! Procedural statements.

use super::Printer;
use crate::indent::Indent;
use recast_ast::{Assignment, Block, Expr, ForInit, NodeList, Statement, TokenId, VerilogToken};
use std::io::Write;

impl<W: Write> Printer<'_, W> {
    pub(super) fn stmt(&mut self, stmt: &Statement, indent: Indent) {
        if !self.out.is_usable() {
            return;
        }
        match stmt {
            Statement::BlockingAssign(assign) => {
                self.pad(indent);
                self.assignment(assign, VerilogToken::Equals, indent);
                self.put(" ;\n");
            }
            Statement::NonBlockingAssign(assign) => {
                self.pad(indent);
                self.assignment(assign, VerilogToken::LessEquals, indent);
                self.put(" ;\n");
            }
            Statement::GenVarAssign(assign) => {
                self.pad(indent);
                self.genvar_assign(assign, indent);
                self.put(" ;\n");
            }
            Statement::Assign { assign } | Statement::Force { assign } => {
                let keyword = match stmt {
                    Statement::Force { .. } => "force ",
                    _ => "assign ",
                };
                self.pad(indent);
                self.put(keyword);
                if let Some(assign) = assign {
                    self.net_reg_assign(assign, indent);
                }
                self.put(" ;\n");
            }
            Statement::Deassign { lval } => self.keyword_stmt("deassign ", lval, indent),
            Statement::Release { lval } => self.keyword_stmt("release ", lval, indent),
            Statement::Disable { target } => self.keyword_stmt("disable ", target, indent),
            Statement::EventTrigger { event } => self.keyword_stmt("-> ", event, indent),
            Statement::TaskEnable { name, args } => {
                self.pad(indent);
                self.opt_expr(name, indent);
                self.put(" ");
                self.args(args, indent);
                self.put(" ;\n");
            }
            Statement::SystemTaskEnable { name, args } => {
                self.pad(indent);
                self.system_name(*name);
                self.put(" ");
                self.args(args, indent);
                self.put(" ;\n");
            }
            Statement::DelayControl { delay, stmt } => {
                if let Some(delay) = delay {
                    self.pad(indent);
                    self.put("#");
                    self.expr(delay, indent);
                    self.put(" ");
                }
                // The controlled statement pads itself again after `#delay `.
                // Existing output depends on that spacing.
                self.controlled(stmt, indent);
            }
            Statement::EventControl { at, stmt } => {
                if let Some(events) = at {
                    self.pad(indent);
                    self.put("@(");
                    self.event_list(events, indent);
                    self.put(")");
                    if stmt.is_some() {
                        self.put("\n");
                    }
                }
                self.controlled(stmt, indent);
            }
            Statement::Conditional {
                cond,
                then_stmt,
                else_stmt,
            } => {
                self.pad(indent);
                self.put("if (");
                self.opt_expr(cond, indent);
                self.put(") \n");
                self.opt_stmt(then_stmt, indent.deeper());
                if let Some(else_stmt) = else_stmt {
                    self.pad(indent);
                    self.put("else\n");
                    self.stmt(else_stmt, indent.deeper());
                }
            }
            Statement::Case {
                style,
                cond,
                items,
                full_case,
                parallel_case,
            } => {
                self.pad(indent);
                self.case_keyword(*style);
                self.put(" (");
                self.opt_expr(cond, indent);
                self.put(")\n");
                if self.format.case_pragmas && (*full_case || *parallel_case) {
                    self.pad(indent);
                    self.put("// synopsys");
                    if *full_case {
                        self.put(" full_case");
                    }
                    if *parallel_case {
                        self.put(" parallel_case");
                    }
                    self.put("\n");
                }
                for item in items.iter().flatten() {
                    self.case_item(item, indent.deeper());
                }
                self.pad(indent);
                self.put("endcase\n");
            }
            Statement::Forever { stmt } => {
                self.pad(indent);
                self.put("forever\n");
                self.opt_stmt(stmt, indent.deeper());
            }
            Statement::Repeat { count, stmt } => self.loop_stmt("repeat (", count, stmt, indent),
            Statement::While { cond, stmt } => self.loop_stmt("while (", cond, stmt, indent),
            Statement::For {
                initials,
                cond,
                repetitions,
                stmt,
            } => {
                self.pad(indent);
                self.put("for (");
                for (i, init) in initials.iter().enumerate() {
                    if i > 0 {
                        self.put(", ");
                    }
                    match init {
                        Some(ForInit::Decl(decl)) => self.data_decl(decl, indent, false),
                        Some(ForInit::Assign(assign)) => {
                            self.assignment(assign, VerilogToken::Equals, indent)
                        }
                        None => {}
                    }
                }
                self.put(" ; ");
                self.opt_expr(cond, indent);
                self.put(" ; ");
                for (i, rep) in repetitions.iter().enumerate() {
                    if i > 0 {
                        self.put(", ");
                    }
                    if let Some(rep) = rep {
                        self.assignment(rep, VerilogToken::Equals, indent);
                    }
                }
                self.put(")\n");
                self.opt_stmt(stmt, indent.deeper());
            }
            Statement::Wait { cond, stmt } => {
                self.pad(indent);
                self.put("wait (");
                self.opt_expr(cond, indent);
                self.put(") ");
                match stmt {
                    Some(stmt) => self.stmt(stmt, indent.deeper()),
                    None => self.put(";\n"),
                }
            }
            Statement::SeqBlock(block) => self.block(block, "begin", "end", indent),
            Statement::ParBlock(block) => self.block(block, "fork", "join", indent),
            Statement::Null => {
                self.pad(indent);
                self.put(";\n");
            }
            Statement::Opaque(node) => self.unhandled("statement", node),
        }
    }

    pub(super) fn stmts(&mut self, stmts: &NodeList<Statement>, indent: Indent) {
        for stmt in stmts.iter().flatten() {
            self.stmt(stmt, indent);
        }
    }

    fn opt_stmt(&mut self, stmt: &Option<Box<Statement>>, indent: Indent) {
        if let Some(stmt) = stmt {
            self.stmt(stmt, indent);
        }
    }

    /// The statement under a timing control stays at the control's depth.
    fn controlled(&mut self, stmt: &Option<Box<Statement>>, indent: Indent) {
        match stmt {
            Some(stmt) => self.stmt(stmt, indent),
            None => self.put(";\n"),
        }
    }

    /// Writes `lval op [control ]value` with no padding or terminator.
    fn assignment(&mut self, assign: &Assignment, op: VerilogToken, indent: Indent) {
        self.opt_expr(&assign.lval, indent);
        self.put(" ");
        self.keyword(op);
        self.put(" ");
        if let Some(control) = &assign.control {
            self.control(control, indent);
            self.put(" ");
        }
        self.opt_expr(&assign.value, indent);
    }

    fn keyword_stmt(&mut self, keyword: &str, operand: &Option<Box<Expr>>, indent: Indent) {
        self.pad(indent);
        self.put(keyword);
        self.opt_expr(operand, indent);
        self.put(" ;\n");
    }

    fn loop_stmt(
        &mut self,
        head: &str,
        operand: &Option<Box<Expr>>,
        stmt: &Option<Box<Statement>>,
        indent: Indent,
    ) {
        self.pad(indent);
        self.put(head);
        self.opt_expr(operand, indent);
        self.put(")\n");
        self.opt_stmt(stmt, indent.deeper());
    }

    fn block(&mut self, block: &Block, open: &str, close: &str, indent: Indent) {
        self.pad(indent);
        self.put(open);
        if let Some(label) = &block.label {
            self.put(" : ");
            self.id_def(label, indent);
        }
        self.put("\n");
        self.items(&block.decls, indent.deeper());
        self.stmts(&block.stmts, indent.deeper());
        self.pad(indent);
        self.put(close);
        self.put("\n");
    }

    /// Writes the case keyword, falling back to plain `case`.
    pub(super) fn case_keyword(&mut self, style: TokenId) {
        if style.is_none() {
            self.keyword(VerilogToken::Case);
        } else {
            self.token(style);
        }
    }
}
