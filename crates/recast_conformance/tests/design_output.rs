//! Whole-design rendering of representative Verilog units.

use recast_ast::*;
use recast_conformance::{print_design, sized, Tree};

#[test]
fn counter_with_synchronous_reset() {
    let t = Tree::new();
    let counter = t.module(
        "counter",
        &["clk", "rst", "count"],
        vec![
            t.decl(VerilogToken::Input, None, 1, &["clk"]),
            t.decl(VerilogToken::Input, None, 1, &["rst"]),
            t.decl(VerilogToken::Output, Some(VerilogToken::Reg), 8, &["count"]),
            t.always(
                vec![t.posedge("clk")],
                t.if_else(
                    t.id("rst"),
                    t.nonblocking("count", sized(8, 0)),
                    Some(t.nonblocking(
                        "count",
                        Expr::binary(VerilogToken::Plus, t.id("count"), Expr::int(1)),
                    )),
                ),
            ),
        ],
    );

    let result = print_design(&t, &t.design(vec![counter]));
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    assert_eq!(
        result.text,
        "\nmodule counter (clk, rst, count) ;\n\
         \x20   input clk ; \n\
         \x20   input rst ; \n\
         \x20   output reg [7:0] count ; \n\
         \x20   always\n\
         \x20       @(posedge clk)\n\
         \x20       if (rst) \n\
         \x20           count <= 8'b00000000 ;\n\
         \x20       else\n\
         \x20           count <= (count + 1) ;\n\
         endmodule\n\n\n"
    );
}

#[test]
fn combinational_mux_with_default_arm() {
    let t = Tree::new();
    let select = |bit: i64| Expr::IndexedId {
        prefix: t.id("d").boxed(),
        index: Expr::int(bit).boxed(),
    };
    let mux = t.module(
        "mux",
        &["sel", "d", "y"],
        vec![
            t.decl(VerilogToken::Input, None, 2, &["sel"]),
            t.decl(VerilogToken::Input, None, 4, &["d"]),
            t.decl(VerilogToken::Output, Some(VerilogToken::Reg), 1, &["y"]),
            t.always(
                Vec::new(),
                t.case(
                    t.id("sel"),
                    vec![
                        (vec![sized(2, 0)], t.blocking("y", select(0))),
                        (vec![sized(2, 1), sized(2, 2)], t.blocking("y", select(1))),
                        (Vec::new(), t.blocking("y", sized(1, 0))),
                    ],
                ),
            ),
        ],
    );

    let result = print_design(&t, &t.design(vec![mux]));
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    assert_eq!(
        result.text,
        "\nmodule mux (sel, d, y) ;\n\
         \x20   input [1:0] sel ; \n\
         \x20   input [3:0] d ; \n\
         \x20   output reg y ; \n\
         \x20   always\n\
         \x20       @(*)\n\
         \x20       case (sel)\n\
         \x20           2'b00 : \n\
         \x20               y = d[0] ;\n\
         \x20           2'b01, 2'b10 : \n\
         \x20               y = d[1] ;\n\
         \x20           default : \n\
         \x20               y = 1'b0 ;\n\
         \x20       endcase\n\
         endmodule\n\n\n"
    );
}

#[test]
fn hierarchy_renders_units_in_order() {
    let t = Tree::new();
    let leaf = t.module("leaf", &["i", "o"], vec![t.assign("o", t.id("i"))]);
    let top = t.module(
        "top",
        &["a", "q"],
        vec![
            t.wire(1, &["n1"]),
            t.instance("leaf", "u0", &[("i", "a"), ("o", "n1")]),
            t.assign("q", Expr::unary(VerilogToken::Tilde, t.id("n1"))),
        ],
    );

    let result = print_design(&t, &t.design(vec![leaf, top]));
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    assert_eq!(
        result.text,
        "\nmodule leaf (i, o) ;\n\
         \x20   assign o = i ; \n\
         endmodule\n\n\n\
         \nmodule top (a, q) ;\n\
         \x20   wire n1 ; \n\
         \x20   leaf u0 (.i(a), .o(n1)) ; \n\
         \x20   assign q = ~(n1) ; \n\
         endmodule\n\n\n"
    );
}

#[test]
fn parameterized_module_with_ansi_ports() {
    let t = Tree::new();
    let width_range = Range::new(
        Expr::binary(VerilogToken::Minus, t.id("W"), Expr::int(1)),
        Expr::int(0),
    );
    let port = |dir: VerilogToken, name: &str| {
        Some(Expr::AnsiPortDecl(AnsiPortDecl {
            dir: dir.id(),
            data_type: Some(DataType {
                ty: TokenId::NONE,
                signing: TokenId::NONE,
                dims: Some(width_range.clone()),
            }),
            ids: vec![t.def(name)],
        }))
    };
    let adder = Module {
        id: Some(IdDef::Module {
            name: Some(t.name("inc")),
        }),
        params: Some(vec![Some(t.parameter("W", Expr::int(8)))]),
        ports: Some(vec![
            port(VerilogToken::Input, "a"),
            port(VerilogToken::Output, "b"),
        ]),
        items: vec![Some(t.assign(
            "b",
            Expr::binary(VerilogToken::Plus, t.id("a"), Expr::int(1)),
        ))],
        ..Module::default()
    };

    let result = print_design(&t, &t.design(vec![adder]));
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    assert_eq!(
        result.text,
        "\nmodule inc #(parameter W = 8\n) (\n\
         \x20   input [(W - 1):0] a, \n\
         \x20   output [(W - 1):0] b) ;\n\
         \x20   assign b = (a + 1) ; \n\
         endmodule\n\n\n"
    );
}

#[test]
fn generate_loop_over_bits() {
    let t = Tree::new();
    let bit = |name: &str| Expr::IndexedId {
        prefix: t.id(name).boxed(),
        index: t.id("i").boxed(),
    };
    let genvar = ModuleItem::DataDecl(DataDecl {
        decl_kind: VerilogToken::Genvar.id(),
        ids: vec![Some(IdDef::Genvar {
            name: Some(t.name("i")),
        })],
        ..DataDecl::default()
    });
    let body = ModuleItem::ContinuousAssign(ContinuousAssign {
        strength: None,
        delay: None,
        assigns: vec![Some(NetRegAssign {
            lval: bit("y").boxed(),
            rval: Expr::unary(VerilogToken::Tilde, bit("a")).boxed(),
        })],
    });
    let generate = ModuleItem::GenerateConstruct(GenerateConstruct {
        items: vec![Some(ModuleItem::GenerateFor(GenerateFor {
            init: Some(GenVarAssign {
                name: Some(t.name("i")),
                value: Expr::int(0).boxed(),
            }),
            cond: Expr::binary(VerilogToken::LessThan, t.id("i"), Expr::int(4)).boxed(),
            step: Some(GenVarAssign {
                name: Some(t.name("i")),
                value: Expr::binary(VerilogToken::Plus, t.id("i"), Expr::int(1)).boxed(),
            }),
            block_id: Some(IdDef::Block {
                name: Some(t.name("bits")),
            }),
            items: vec![Some(body)],
        }))],
    });
    let module = t.module("inv4", &["a", "y"], vec![genvar, generate]);

    let result = print_design(&t, &t.design(vec![module]));
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    assert_eq!(
        result.text,
        "\nmodule inv4 (a, y) ;\n\
         \x20   genvar i\n\
         \x20   generate\n\
         \x20       for (i = 0 ; (i < 4) ; i = (i + 1))\n\
         \x20       begin : bits\n\
         \x20           assign y[i] = ~(a[i]) ; \n\
         \x20       end\n\
         \x20   endgenerate\n\
         endmodule\n\n\n"
    );
}

#[test]
fn function_and_testbench_initial_block() {
    let t = Tree::new();
    let function = ModuleItem::FunctionDecl(FunctionDecl {
        automatic: false,
        data_type: None,
        id: Some(IdDef::Function {
            name: Some(t.name("parity")),
        }),
        decls: vec![Some(t.decl(VerilogToken::Input, None, 8, &["d"]))],
        stmts: Some(vec![Some(t.blocking(
            "parity",
            Expr::unary(VerilogToken::Caret, t.id("d")),
        ))]),
    });
    let initial = ModuleItem::Initial(ProceduralConstruct {
        stmt: Some(Box::new(t.begin(vec![
            Statement::SystemTaskEnable {
                name: Some(t.name("display")),
                args: Some(vec![
                    Some(Expr::Const(Constant::Str {
                        image: "\"%b\"".to_owned(),
                    })),
                    Some(Expr::FunctionCall {
                        name: t.id("parity").boxed(),
                        args: Some(vec![Some(t.id("x"))]),
                    }),
                ]),
            },
            Statement::SystemTaskEnable {
                name: Some(t.name("finish")),
                args: None,
            },
        ]))),
    });
    let tb = t.module(
        "tb",
        &[],
        vec![t.reg(8, &["x"]), function, initial],
    );

    let result = print_design(&t, &t.design(vec![tb]));
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    assert_eq!(
        result.text,
        "\nmodule tb () ;\n\
         \x20   reg [7:0] x ; \n\
         \x20   function parity ; \n\
         \x20       input [7:0] d ; \n\
         \x20       parity = ^(d) ;\n\
         \x20   endfunction\n\
         \x20   initial\n\
         \x20       begin\n\
         \x20           $display (\"%b\",parity(x)) ;\n\
         \x20           $finish  ;\n\
         \x20       end\n\
         endmodule\n\n\n"
    );
}

#[test]
fn user_defined_primitive_with_table() {
    let t = Tree::new();
    let mut udp = t.module(
        "udp_or",
        &["o", "a", "b"],
        vec![
            t.decl(VerilogToken::Output, None, 1, &["o"]),
            t.decl(VerilogToken::Input, None, 1, &["a", "b"]),
            ModuleItem::Table(Table {
                entries: vec!["0 0 : 0".to_owned(), "1 ? : 1".to_owned()],
            }),
        ],
    );
    udp.kind = UnitKind::Primitive;
    udp.id = Some(IdDef::Udp {
        name: Some(t.name("udp_or")),
    });

    let result = print_design(&t, &t.design(vec![udp]));
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    assert_eq!(
        result.text,
        "\nprimitive udp_or (o, a, b) ;\n\
         \x20   output o ; \n\
         \x20   input a,\n\
         \x20       b ; \n\
         \x20   table\n\
         \x20   0 0 : 0 ;\n\
         \x20   1 ? : 1 ;\n\
         \x20   endtable\n\
         endprimitive\n\n\n"
    );
}

#[test]
fn cell_with_specify_timing() {
    let t = Tree::new();
    let specify = ModuleItem::SpecifyBlock(SpecifyBlock {
        items: vec![
            Some(ModuleItem::PathDecl(PathDecl {
                condition: None,
                ifnone: false,
                path: Some(Path {
                    inputs: vec![Some(t.id("a"))],
                    connection: VerilogToken::EqualsGreater.id(),
                    outputs: vec![Some(t.id("y"))],
                    ..Path::default()
                }),
                delays: vec![Some(Expr::MinTypMax {
                    min: Expr::int(1).boxed(),
                    typ: Expr::int(2).boxed(),
                    max: Expr::int(3).boxed(),
                })],
            })),
        ],
    });
    let mut cell = t.module(
        "buf_cell",
        &["a", "y"],
        vec![
            ModuleItem::GateInstantiation(GateInstantiation {
                gate: VerilogToken::Buf.id(),
                strength: None,
                delay: None,
                instances: vec![Some(InstId {
                    name: None,
                    range: None,
                    ports: vec![Some(t.id("y")), Some(t.id("a"))],
                })],
            }),
            specify,
        ],
    );
    cell.directives = Directives {
        default_net_type: TokenId::NONE,
        cell_define: true,
        unconnected_drive: TokenId::NONE,
        timescale: Some("1ns / 10ps".to_owned()),
    };

    let result = print_design(&t, &t.design(vec![cell]));
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    assert_eq!(
        result.text,
        "\n`celldefine\n`timescale 1ns / 10ps\n\
         module buf_cell (a, y) ;\n\
         \x20   buf (y, a) ; \n\
         \x20   specify\n\
         \x20       (a => y) = ((1:2:3)) ; \n\
         \x20   endspecify\n\
         endmodule\n\n\
         `endcelldefine\n\n"
    );
}

#[test]
fn nested_unit_is_indented_by_caller_depth() {
    let t = Tree::new();
    let module = t.module("m", &[], vec![t.wire(4, &["w"])]);
    let interner = &t.interner;
    let diagnostics = recast_diagnostics::DiagnosticSink::new();
    let mut printer = recast_printer::Printer::new(
        recast_printer::OutputSink::new(Vec::new()),
        interner,
        &diagnostics,
    );
    printer
        .render(&module, recast_printer::Indent::new(1))
        .unwrap();
    let text = String::from_utf8(printer.finish().unwrap()).unwrap();
    assert_eq!(
        text,
        "\n    module m () ;\n        wire [3:0] w ; \n    endmodule\n\n\n"
    );
}
