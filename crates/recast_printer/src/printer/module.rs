//! Designs, design units and compiler directives.

use super::Printer;
use crate::indent::Indent;
use recast_ast::{Design, Directives, IdDef, Module, ModuleItem, UnitKind, VerilogToken};
use std::io::Write;

impl<W: Write> Printer<'_, W> {
    pub(super) fn design(&mut self, design: &Design, indent: Indent) {
        for module in design.modules.iter().flatten() {
            if !self.out.is_usable() {
                return;
            }
            self.module(module, indent);
        }
    }

    pub(super) fn module(&mut self, module: &Module, indent: Indent) {
        if !self.out.is_usable() {
            return;
        }
        let name = module
            .id
            .as_ref()
            .and_then(IdDef::name)
            .and_then(|name| self.interner.try_resolve(name))
            .map(str::to_owned);
        let outer = std::mem::replace(&mut self.unit, name);

        let (open, close) = match module.kind {
            UnitKind::Module => (VerilogToken::Module, VerilogToken::Endmodule),
            UnitKind::Macromodule => (VerilogToken::Macromodule, VerilogToken::Endmodule),
            UnitKind::Primitive => (VerilogToken::Primitive, VerilogToken::Endprimitive),
        };

        self.put("\n");
        self.open_directives(&module.directives);
        self.pad(indent);
        self.keyword(open);
        self.put(" ");
        if let Some(id) = &module.id {
            self.id_def(id, indent);
        }
        self.put(" ");

        if let Some(params) = &module.params {
            self.put("#(");
            for (i, param) in params.iter().enumerate() {
                if i > 0 {
                    self.put(", ");
                }
                match param {
                    Some(ModuleItem::DataDecl(decl)) => self.data_decl(decl, indent.deeper(), true),
                    Some(item) => self.item(item, indent.deeper()),
                    None => {}
                }
            }
            self.put(") ");
        }
        if let Some(ports) = &module.ports {
            self.put("(");
            self.expr_list(ports, ", ", indent.deeper());
            self.put(")");
        }
        self.put(" ;\n");

        for item in module.items.iter().flatten() {
            self.item(item, indent.deeper());
        }

        self.pad(indent);
        self.keyword(close);
        self.put("\n\n");
        self.close_directives(&module.directives);
        self.put("\n");

        self.unit = outer;
    }

    fn open_directives(&mut self, directives: &Directives) {
        let net_type = directives.default_net_type;
        if !net_type.is_none() && net_type.token() != Some(VerilogToken::Wire) {
            self.put("`default_nettype ");
            self.token(net_type);
            self.put("\n");
        }
        if directives.cell_define {
            self.put("`celldefine\n");
        }
        if !directives.unconnected_drive.is_none() {
            self.put("`unconnected_drive ");
            self.token(directives.unconnected_drive);
            self.put("\n");
        }
        if let Some(timescale) = &directives.timescale {
            self.put("`timescale ");
            self.put(timescale);
            self.put("\n");
        }
    }

    fn close_directives(&mut self, directives: &Directives) {
        if directives.cell_define {
            self.put("`endcelldefine\n");
        }
        if !directives.unconnected_drive.is_none() {
            self.put("`nounconnected_drive\n");
        }
    }
}
