//! Identifier definitions and the small structural nodes shared across
//! items, statements and expressions.

use super::Printer;
use crate::indent::Indent;
use recast_ast::{
    CaseItem, DataType, DelayOrEventControl, Expr, GenerateCaseItem, IdDef, InstId, NetRegAssign,
    NodeList, Path, Strength,
};
use std::io::Write;

impl<W: Write> Printer<'_, W> {
    pub(super) fn id_def(&mut self, id: &IdDef, indent: Indent) {
        if !self.out.is_usable() {
            return;
        }
        match id {
            IdDef::Variable { name, dims, init } => {
                self.opt_ident(*name);
                if let Some(dims) = dims {
                    self.put(" [");
                    self.range(dims, indent);
                    self.put("]");
                }
                if let Some(init) = init {
                    self.put(" = ");
                    self.expr(init, indent);
                }
            }
            IdDef::Param { name, init } => {
                self.opt_ident(*name);
                if let Some(init) = init {
                    self.put(" = ");
                    self.expr(init, indent);
                }
            }
            IdDef::Plain { name }
            | IdDef::Module { name }
            | IdDef::Udp { name }
            | IdDef::Task { name }
            | IdDef::Function { name }
            | IdDef::Genvar { name }
            | IdDef::Block { name } => self.opt_ident(*name),
            IdDef::Opaque(node) => self.unhandled("identifier", node),
        }
    }

    pub(super) fn data_type(&mut self, data_type: &DataType, indent: Indent) {
        if !data_type.ty.is_none() {
            self.token(data_type.ty);
            self.put(" ");
        }
        if !data_type.signing.is_none() {
            self.token(data_type.signing);
            self.put(" ");
        }
        if let Some(dims) = &data_type.dims {
            self.put("[");
            self.range(dims, indent);
            self.put("] ");
        }
    }

    pub(super) fn strength(&mut self, strength: &Strength) {
        self.put("(");
        self.token(strength.lval);
        if !strength.rval.is_none() {
            self.put(",");
            self.token(strength.rval);
        }
        self.put(")");
    }

    pub(super) fn net_reg_assign(&mut self, assign: &NetRegAssign, indent: Indent) {
        self.opt_expr(&assign.lval, indent);
        if let Some(rval) = &assign.rval {
            self.put(" = ");
            self.expr(rval, indent);
        }
    }

    pub(super) fn inst_id(&mut self, inst: &InstId, indent: Indent) {
        if let Some(name) = inst.name {
            self.ident(name);
            self.put(" ");
        }
        if let Some(range) = &inst.range {
            self.put("[");
            self.range(range, indent);
            self.put("] ");
        }
        self.put("(");
        self.expr_list(&inst.ports, ", ", indent);
        self.put(")");
    }

    pub(super) fn case_item(&mut self, item: &CaseItem, indent: Indent) {
        self.case_label(&item.conditions, indent);
        match &item.stmt {
            Some(stmt) => self.stmt(stmt, indent.deeper()),
            None => self.empty_arm(indent),
        }
    }

    pub(super) fn generate_case_item(&mut self, item: &GenerateCaseItem, indent: Indent) {
        self.case_label(&item.conditions, indent);
        match &item.item {
            Some(body) => self.item(body, indent.deeper()),
            None => self.empty_arm(indent),
        }
    }

    /// Writes `conditions : ` or `default : ` on its own line.
    fn case_label(&mut self, conditions: &Option<NodeList<Expr>>, indent: Indent) {
        self.pad(indent);
        match conditions {
            Some(conditions) => self.expr_list(conditions, ", ", indent),
            None => self.put("default"),
        }
        self.put(" : \n");
    }

    fn empty_arm(&mut self, indent: Indent) {
        self.pad(indent.deeper());
        self.put("; \n");
    }

    /// Writes a specify path, `(inputs => outputs) ` or the edge-sensitive
    /// form `(edge inputs => (outputs polarity: source)) `.
    pub(super) fn path(&mut self, path: &Path, indent: Indent) {
        let edge_sensitive = path.data_source.is_some();
        self.put("(");
        if edge_sensitive && !path.edge.is_none() {
            self.token(path.edge);
            self.put(" ");
        }
        self.expr_list(&path.inputs, ",", indent);
        self.put(" ");
        if !edge_sensitive {
            self.token(path.polarity);
        }
        self.token(path.connection);
        self.put(" ");
        if edge_sensitive {
            self.put("(");
        }
        self.expr_list(&path.outputs, ",", indent);
        if let Some(source) = &path.data_source {
            self.put(" ");
            self.token(path.polarity);
            self.put(": ");
            self.expr(source, indent);
            self.put(")");
        }
        self.put(") ");
    }

    /// Writes an intra-assignment timing control.
    pub(super) fn control(&mut self, control: &DelayOrEventControl, indent: Indent) {
        if let Some(delay) = &control.delay {
            self.put("#");
            self.expr(delay, indent);
        }
        if let Some(events) = &control.events {
            if let Some(repeat) = &control.repeat {
                self.put("repeat (");
                self.expr(repeat, indent);
                self.put(") ");
            }
            self.put("@ (");
            self.event_list(events, indent);
            self.put(")");
        }
    }
}
