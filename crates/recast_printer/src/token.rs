//! Keyword and operator spellings.
//!
//! The match in [`spelling`] is exhaustive over [`VerilogToken`], so adding a
//! token without a spelling is a compile error rather than an output gap.

use recast_ast::{TokenId, VerilogToken};

/// Returns the source spelling of a known token.
pub fn spelling(token: VerilogToken) -> &'static str {
    use VerilogToken::*;
    match token {
        LeftParen => "(",
        RightParen => ")",
        LeftBracket => "[",
        RightBracket => "]",
        LeftBrace => "{",
        RightBrace => "}",
        Comma => ",",
        Semicolon => ";",
        Colon => ":",
        Dot => ".",
        Hash => "#",
        At => "@",
        Equals => "=",
        Question => "?",
        Plus => "+",
        Minus => "-",
        Star => "*",
        Slash => "/",
        Percent => "%",
        DoubleStar => "**",
        GreaterThan => ">",
        LessThan => "<",
        GreaterEquals => ">=",
        LessEquals => "<=",
        DoubleEquals => "==",
        BangEquals => "!=",
        TripleEquals => "===",
        BangDoubleEquals => "!==",
        Bang => "!",
        DoubleAmpersand => "&&",
        DoublePipe => "||",
        Tilde => "~",
        Ampersand => "&",
        Pipe => "|",
        Caret => "^",
        TildeAmpersand => "~&",
        TildePipe => "~|",
        TildeCaret => "~^",
        DoubleLess => "<<",
        DoubleGreater => ">>",
        TripleLess => "<<<",
        TripleGreater => ">>>",
        StarGreater => "*>",
        EqualsGreater => "=>",
        Arrow => "->",
        TripleAmpersand => "&&&",
        PlusColon => "+:",
        MinusColon => "-:",
        AttrOpen => "(*",
        AttrClose => "*)",

        Always => "always",
        And => "and",
        Assign => "assign",
        Automatic => "automatic",
        Begin => "begin",
        Buf => "buf",
        Bufif0 => "bufif0",
        Bufif1 => "bufif1",
        Case => "case",
        Casex => "casex",
        Casez => "casez",
        Cell => "cell",
        Cmos => "cmos",
        Config => "config",
        Deassign => "deassign",
        Default => "default",
        Defparam => "defparam",
        Design => "design",
        Disable => "disable",
        Edge => "edge",
        Else => "else",
        End => "end",
        Endcase => "endcase",
        Endconfig => "endconfig",
        Endfunction => "endfunction",
        Endgenerate => "endgenerate",
        Endmodule => "endmodule",
        Endprimitive => "endprimitive",
        Endspecify => "endspecify",
        Endtable => "endtable",
        Endtask => "endtask",
        Event => "event",
        For => "for",
        Force => "force",
        Forever => "forever",
        Fork => "fork",
        Function => "function",
        Generate => "generate",
        Genvar => "genvar",
        Highz0 => "highz0",
        Highz1 => "highz1",
        If => "if",
        Ifnone => "ifnone",
        Incdir => "incdir",
        Include => "include",
        Initial => "initial",
        Inout => "inout",
        Input => "input",
        Instance => "instance",
        Integer => "integer",
        Join => "join",
        Large => "large",
        Liblist => "liblist",
        Library => "library",
        Localparam => "localparam",
        Macromodule => "macromodule",
        Medium => "medium",
        Module => "module",
        Nand => "nand",
        Negedge => "negedge",
        Nmos => "nmos",
        NetNone => "none",
        Nor => "nor",
        Noshowcancelled => "noshowcancelled",
        Not => "not",
        Notif0 => "notif0",
        Notif1 => "notif1",
        Or => "or",
        Output => "output",
        Parameter => "parameter",
        Pmos => "pmos",
        Posedge => "posedge",
        Primitive => "primitive",
        Pull0 => "pull0",
        Pull1 => "pull1",
        Pulldown => "pulldown",
        Pullup => "pullup",
        PulsestyleOndetect => "pulsestyle_ondetect",
        PulsestyleOnevent => "pulsestyle_onevent",
        Rcmos => "rcmos",
        Real => "real",
        Realtime => "realtime",
        Reg => "reg",
        Release => "release",
        Repeat => "repeat",
        Rnmos => "rnmos",
        Rpmos => "rpmos",
        Rtran => "rtran",
        Rtranif0 => "rtranif0",
        Rtranif1 => "rtranif1",
        Scalared => "scalared",
        Showcancelled => "showcancelled",
        Signed => "signed",
        Small => "small",
        Specify => "specify",
        Specparam => "specparam",
        Strong0 => "strong0",
        Strong1 => "strong1",
        Supply0 => "supply0",
        Supply1 => "supply1",
        Table => "table",
        Task => "task",
        Time => "time",
        Tran => "tran",
        Tranif0 => "tranif0",
        Tranif1 => "tranif1",
        Tri => "tri",
        Tri0 => "tri0",
        Tri1 => "tri1",
        Triand => "triand",
        Trior => "trior",
        Trireg => "trireg",
        Unsigned => "unsigned",
        Use => "use",
        Vectored => "vectored",
        Wait => "wait",
        Wand => "wand",
        Weak0 => "weak0",
        Weak1 => "weak1",
        While => "while",
        Wire => "wire",
        Wor => "wor",
        Xnor => "xnor",
        Xor => "xor",
    }
}

/// Returns the spelling of a token identifier.
///
/// The "no token" identifier and identifiers unknown to the table both map to
/// the empty string.
pub fn token_spelling(id: TokenId) -> &'static str {
    id.token().map_or("", spelling)
}
