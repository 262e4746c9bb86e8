//! Expressions.
//!
//! Binary, unary and conditional operators are always fully parenthesized,
//! so the output never depends on operator precedence.

use super::Printer;
use crate::indent::Indent;
use recast_ast::{AnsiPortDecl, Expr, Range};
use std::io::Write;

impl<W: Write> Printer<'_, W> {
    pub(super) fn expr(&mut self, expr: &Expr, indent: Indent) {
        if !self.out.is_usable() {
            return;
        }
        match expr {
            Expr::IdRef { name } => self.opt_ident(*name),
            Expr::IndexedId { prefix, index } => {
                self.opt_expr(prefix, indent);
                self.put("[");
                self.opt_expr(index, indent);
                self.put("]");
            }
            Expr::SelectedName { prefix, suffix } => {
                self.opt_expr(prefix, indent);
                self.put(".");
                self.opt_ident(*suffix);
            }
            Expr::IndexedMemoryId { prefix, indexes } => {
                self.opt_expr(prefix, indent);
                for index in indexes {
                    self.put("[");
                    if let Some(index) = index {
                        self.expr(index, indent);
                    }
                    self.put("]");
                }
            }
            Expr::Concat { exprs } => {
                self.put("{");
                self.expr_list(exprs, ",", indent);
                self.put("}");
            }
            Expr::MultiConcat { repeat, exprs } => {
                self.put("{");
                self.opt_expr(repeat, indent);
                self.put("{");
                self.expr_list(exprs, ",", indent);
                self.put("}}");
            }
            Expr::FunctionCall { name, args } => {
                self.opt_expr(name, indent);
                self.args(args, indent);
            }
            Expr::SystemFunctionCall { name, args } => {
                self.system_name(*name);
                self.args(args, indent);
            }
            Expr::MinTypMax { min, typ, max } => {
                self.put("(");
                self.opt_expr(min, indent);
                self.put(":");
                self.opt_expr(typ, indent);
                self.put(":");
                self.opt_expr(max, indent);
                self.put(")");
            }
            Expr::Unary { op, arg } => {
                self.token(*op);
                self.put("(");
                self.opt_expr(arg, indent);
                self.put(")");
            }
            Expr::Binary { op, left, right } => {
                self.put("(");
                self.opt_expr(left, indent);
                self.put(" ");
                self.token(*op);
                self.put(" ");
                self.opt_expr(right, indent);
                self.put(")");
            }
            Expr::QuestionColon {
                cond,
                then_expr,
                else_expr,
            } => {
                self.put("(");
                self.opt_expr(cond, indent);
                self.put(" ? ");
                self.opt_expr(then_expr, indent);
                self.put(" : ");
                self.opt_expr(else_expr, indent);
                self.put(")");
            }
            Expr::Event { edge, expr } => {
                if !edge.is_none() {
                    self.token(*edge);
                    self.put(" ");
                }
                self.opt_expr(expr, indent);
            }
            Expr::PortConnect { formal, connection } => match formal {
                Some(formal) => {
                    self.put(".");
                    self.ident(*formal);
                    self.put("(");
                    self.opt_expr(connection, indent);
                    self.put(")");
                }
                None => self.opt_expr(connection, indent),
            },
            Expr::PortOpen => {}
            Expr::AnsiPortDecl(decl) => self.ansi_port_decl(decl, indent),
            Expr::TimingCheckEvent {
                edge,
                edge_desc,
                terminal,
                condition,
            } => {
                if !edge.is_none() {
                    self.token(*edge);
                    if let Some(desc) = edge_desc {
                        self.put("[");
                        self.put(desc);
                        self.put("]");
                    }
                    self.put(" ");
                }
                self.opt_expr(terminal, indent);
                if let Some(condition) = condition {
                    self.put(" &&& ");
                    self.expr(condition, indent);
                }
            }
            Expr::Range(range) => self.range(range, indent),
            Expr::Const(constant) => self.constant(constant),
            Expr::Opaque(node) => self.unhandled("expression", node),
        }
    }

    /// An ANSI port declaration starts its own line inside the port list.
    fn ansi_port_decl(&mut self, decl: &AnsiPortDecl, indent: Indent) {
        self.put("\n");
        self.pad(indent);
        if !decl.dir.is_none() {
            self.token(decl.dir);
            self.put(" ");
        }
        if let Some(data_type) = &decl.data_type {
            self.data_type(data_type, indent);
        }
        for (i, id) in decl.ids.iter().flatten().enumerate() {
            if i > 0 {
                self.put(", ");
            }
            self.id_def(id, indent);
        }
    }

    /// Writes a range without brackets. Chained dimensions continue with
    /// `][`.
    pub(super) fn range(&mut self, range: &Range, indent: Indent) {
        self.opt_expr(&range.left, indent);
        if range.part_select.is_none() {
            self.put(":");
        } else {
            self.token(range.part_select);
            self.put(" ");
        }
        self.opt_expr(&range.right, indent);
        if let Some(next) = &range.next {
            self.put("][");
            self.range(next, indent);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::printer::render_to_string;
    use recast_ast::*;
    use recast_common::Interner;
    use recast_config::RecastConfig;

    fn render(expr: &Expr, interner: &Interner) -> String {
        let (text, diags) = render_to_string(expr, interner, &RecastConfig::default());
        assert!(diags.is_empty(), "{diags:?}");
        text
    }

    #[test]
    fn operators_are_fully_parenthesized() {
        let interner = Interner::new();
        let [a, b, c] = ["a", "b", "c"].map(|n| interner.get_or_intern(n));
        let expr = Expr::binary(
            VerilogToken::Star,
            Expr::binary(VerilogToken::Plus, Expr::id(a), Expr::id(b)),
            Expr::unary(VerilogToken::Tilde, Expr::id(c)),
        );
        assert_eq!(render(&expr, &interner), "((a + b) * ~(c))");

        let cond = Expr::QuestionColon {
            cond: Expr::id(a).boxed(),
            then_expr: Expr::id(b).boxed(),
            else_expr: Expr::int(0).boxed(),
        };
        assert_eq!(render(&cond, &interner), "(a ? b : 0)");
    }

    #[test]
    fn absent_operand_renders_as_nothing() {
        let interner = Interner::new();
        let a = interner.get_or_intern("a");
        let expr = Expr::Binary {
            op: VerilogToken::Minus.id(),
            left: Expr::id(a).boxed(),
            right: None,
        };
        assert_eq!(render(&expr, &interner), "(a - )");
    }

    #[test]
    fn selects_and_hierarchy() {
        let interner = Interner::new();
        let [mem, i, u1, q] = ["mem", "i", "u1", "q"].map(|n| interner.get_or_intern(n));

        let indexed = Expr::IndexedId {
            prefix: Expr::id(mem).boxed(),
            index: Expr::id(i).boxed(),
        };
        assert_eq!(render(&indexed, &interner), "mem[i]");

        let part = Expr::IndexedId {
            prefix: Expr::id(mem).boxed(),
            index: Expr::Range(Range::new(Expr::int(7), Expr::int(4))).boxed(),
        };
        assert_eq!(render(&part, &interner), "mem[7:4]");

        let indexed_part = Expr::IndexedId {
            prefix: Expr::id(mem).boxed(),
            index: Expr::Range(Range {
                part_select: VerilogToken::PlusColon.id(),
                ..Range::new(Expr::id(i), Expr::int(4))
            })
            .boxed(),
        };
        assert_eq!(render(&indexed_part, &interner), "mem[i+: 4]");

        let memory = Expr::IndexedMemoryId {
            prefix: Expr::id(mem).boxed(),
            indexes: vec![Some(Expr::int(3)), Some(Expr::id(i))],
        };
        assert_eq!(render(&memory, &interner), "mem[3][i]");

        let selected = Expr::SelectedName {
            prefix: Expr::id(u1).boxed(),
            suffix: Some(q),
        };
        assert_eq!(render(&selected, &interner), "u1.q");
    }

    #[test]
    fn chained_ranges() {
        let interner = Interner::new();
        let range = Range {
            next: Some(Box::new(Range::new(Expr::int(3), Expr::int(0)))),
            ..Range::new(Expr::int(7), Expr::int(0))
        };
        let (text, _) = render_to_string(&range, &interner, &RecastConfig::default());
        assert_eq!(text, "7:0][3:0");
    }

    #[test]
    fn concatenations() {
        let interner = Interner::new();
        let [a, b] = ["a", "b"].map(|n| interner.get_or_intern(n));
        let concat = Expr::Concat {
            exprs: vec![Some(Expr::id(a)), Some(Expr::id(b))],
        };
        assert_eq!(render(&concat, &interner), "{a,b}");

        let multi = Expr::MultiConcat {
            repeat: Expr::int(4).boxed(),
            exprs: vec![Some(Expr::id(a))],
        };
        assert_eq!(render(&multi, &interner), "{4{a}}");
    }

    #[test]
    fn positional_lists_keep_empty_slots() {
        let interner = Interner::new();
        let [f, a] = ["f", "a"].map(|n| interner.get_or_intern(n));
        let call = Expr::FunctionCall {
            name: Expr::id(f).boxed(),
            args: Some(vec![Some(Expr::id(a)), None, Some(Expr::int(1))]),
        };
        assert_eq!(render(&call, &interner), "f(a,,1)");
    }

    #[test]
    fn system_function_and_min_typ_max() {
        let interner = Interner::new();
        let [clog2, w] = ["clog2", "W"].map(|n| interner.get_or_intern(n));
        let call = Expr::SystemFunctionCall {
            name: Some(clog2),
            args: Some(vec![Some(Expr::id(w))]),
        };
        assert_eq!(render(&call, &interner), "$clog2(W)");

        let time = Expr::SystemFunctionCall {
            name: Some(interner.get_or_intern("time")),
            args: None,
        };
        assert_eq!(render(&time, &interner), "$time");

        let mtm = Expr::MinTypMax {
            min: Expr::int(1).boxed(),
            typ: Expr::int(2).boxed(),
            max: Expr::int(3).boxed(),
        };
        assert_eq!(render(&mtm, &interner), "(1:2:3)");
    }

    #[test]
    fn events_with_and_without_edge() {
        let interner = Interner::new();
        let clk = interner.get_or_intern("clk");
        let edge = Expr::event(VerilogToken::Negedge, Expr::id(clk));
        assert_eq!(render(&edge, &interner), "negedge clk");
        let level = Expr::event(TokenId::NONE, Expr::id(clk));
        assert_eq!(render(&level, &interner), "clk");
    }

    #[test]
    fn port_connections() {
        let interner = Interner::new();
        let [d, data] = ["d", "data"].map(|n| interner.get_or_intern(n));
        let named = Expr::PortConnect {
            formal: Some(d),
            connection: Expr::id(data).boxed(),
        };
        assert_eq!(render(&named, &interner), ".d(data)");
        let positional = Expr::PortConnect {
            formal: None,
            connection: Expr::id(data).boxed(),
        };
        assert_eq!(render(&positional, &interner), "data");
        assert_eq!(render(&Expr::PortOpen, &interner), "");
    }

    #[test]
    fn ansi_port_declarations() {
        let interner = Interner::new();
        let [a, b] = ["a", "b"].map(|n| interner.get_or_intern(n));
        let port = Expr::AnsiPortDecl(AnsiPortDecl {
            dir: VerilogToken::Input.id(),
            data_type: Some(DataType {
                ty: VerilogToken::Wire.id(),
                signing: TokenId::NONE,
                dims: Some(Range::new(Expr::int(3), Expr::int(0))),
            }),
            ids: vec![
                Some(IdDef::Plain { name: Some(a) }),
                Some(IdDef::Plain { name: Some(b) }),
            ],
        });
        assert_eq!(render(&port, &interner), "\ninput wire [3:0] a, b");
    }

    #[test]
    fn timing_check_events() {
        let interner = Interner::new();
        let [clk, en] = ["clk", "en"].map(|n| interner.get_or_intern(n));
        let event = Expr::TimingCheckEvent {
            edge: VerilogToken::Edge.id(),
            edge_desc: Some("01, 10".to_owned()),
            terminal: Expr::id(clk).boxed(),
            condition: Expr::id(en).boxed(),
        };
        assert_eq!(render(&event, &interner), "edge[01, 10] clk &&& en");

        let bare = Expr::TimingCheckEvent {
            edge: TokenId::NONE,
            edge_desc: None,
            terminal: Expr::id(clk).boxed(),
            condition: None,
        };
        assert_eq!(render(&bare, &interner), "clk");
    }

    #[test]
    fn escaped_and_hierarchical_references() {
        let interner = Interner::new();
        let escaped = interner.get_or_intern("a+b");
        let path = interner.get_or_intern("top u1 sig");
        assert_eq!(render(&Expr::id(escaped), &interner), "\\a+b ");
        assert_eq!(render(&Expr::id(path), &interner), "top.u1.sig");
    }

    #[test]
    fn opaque_expression_is_reported() {
        let interner = Interner::new();
        let a = interner.get_or_intern("a");
        let expr = Expr::binary(
            VerilogToken::Plus,
            Expr::id(a),
            Expr::Opaque(Opaque::new("VeriDollar")),
        );
        let (text, diags) = render_to_string(&expr, &interner, &RecastConfig::default());
        assert_eq!(text, "(a + )");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("VeriDollar"));
    }
}
