//! Token identifiers for the keywords and punctuation referenced by tree nodes.
//!
//! Nodes never store keyword or operator text. A port direction, a net type,
//! a binary operator or a case style is carried as a [`TokenId`], a small
//! integer agreed between the front-end and the printer. [`VerilogToken`]
//! names every identifier the printer knows how to spell; the numeric values
//! are part of the document format and must never be renumbered.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque token identifier as stored in the tree.
///
/// The value `0` means "no token" and is used for optional qualifiers such as
/// an absent port direction or an absent signing keyword.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(pub u16);

impl TokenId {
    /// The "no token" identifier.
    pub const NONE: TokenId = TokenId(0);

    /// Returns `true` for the "no token" identifier.
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Returns the known token this identifier names, if any.
    pub fn token(self) -> Option<VerilogToken> {
        VerilogToken::from_id(self.0)
    }
}

impl From<VerilogToken> for TokenId {
    fn from(token: VerilogToken) -> Self {
        TokenId(token as u16)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

macro_rules! verilog_tokens {
    ($($(#[$doc:meta])* $name:ident = $id:literal,)*) => {
        /// A keyword, operator or punctuation token known to the printer.
        ///
        /// The discriminant of each variant is its stable [`TokenId`] value.
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
        #[repr(u16)]
        pub enum VerilogToken {
            $($(#[$doc])* $name = $id,)*
        }

        impl VerilogToken {
            /// Every known token, in identifier order.
            pub const ALL: &'static [VerilogToken] = &[$(VerilogToken::$name,)*];

            /// Looks up the token with the given identifier value.
            pub fn from_id(id: u16) -> Option<Self> {
                match id {
                    $($id => Some(VerilogToken::$name),)*
                    _ => None,
                }
            }
        }
    };
}

verilog_tokens! {
    // === Operators and punctuation ===
    /// `(`
    LeftParen = 1,
    /// `)`
    RightParen = 2,
    /// `[`
    LeftBracket = 3,
    /// `]`
    RightBracket = 4,
    /// `{`
    LeftBrace = 5,
    /// `}`
    RightBrace = 6,
    /// `,`
    Comma = 7,
    /// `;`
    Semicolon = 8,
    /// `:`
    Colon = 9,
    /// `.`
    Dot = 10,
    /// `#`
    Hash = 11,
    /// `@`
    At = 12,
    /// `=`
    Equals = 13,
    /// `?`
    Question = 14,
    /// `+`
    Plus = 15,
    /// `-`
    Minus = 16,
    /// `*`
    Star = 17,
    /// `/`
    Slash = 18,
    /// `%`
    Percent = 19,
    /// `**`
    DoubleStar = 20,
    /// `>`
    GreaterThan = 21,
    /// `<`
    LessThan = 22,
    /// `>=`
    GreaterEquals = 23,
    /// `<=`
    LessEquals = 24,
    /// `==`
    DoubleEquals = 25,
    /// `!=`
    BangEquals = 26,
    /// `===`
    TripleEquals = 27,
    /// `!==`
    BangDoubleEquals = 28,
    /// `!`
    Bang = 29,
    /// `&&`
    DoubleAmpersand = 30,
    /// `||`
    DoublePipe = 31,
    /// `~`
    Tilde = 32,
    /// `&`
    Ampersand = 33,
    /// `|`
    Pipe = 34,
    /// `^`
    Caret = 35,
    /// `~&`
    TildeAmpersand = 36,
    /// `~|`
    TildePipe = 37,
    /// `~^`
    TildeCaret = 38,
    /// `<<`
    DoubleLess = 39,
    /// `>>`
    DoubleGreater = 40,
    /// `<<<`
    TripleLess = 41,
    /// `>>>`
    TripleGreater = 42,
    /// `*>` (full path connection)
    StarGreater = 43,
    /// `=>` (parallel path connection)
    EqualsGreater = 44,
    /// `->` (event trigger)
    Arrow = 45,
    /// `&&&` (timing-check condition)
    TripleAmpersand = 46,
    /// `+:` (ascending indexed part-select)
    PlusColon = 47,
    /// `-:` (descending indexed part-select)
    MinusColon = 48,
    /// `(*`
    AttrOpen = 49,
    /// `*)`
    AttrClose = 50,

    // === Keywords ===
    /// `always`
    Always = 100,
    /// `and`
    And = 101,
    /// `assign`
    Assign = 102,
    /// `automatic`
    Automatic = 103,
    /// `begin`
    Begin = 104,
    /// `buf`
    Buf = 105,
    /// `bufif0`
    Bufif0 = 106,
    /// `bufif1`
    Bufif1 = 107,
    /// `case`
    Case = 108,
    /// `casex`
    Casex = 109,
    /// `casez`
    Casez = 110,
    /// `cell`
    Cell = 111,
    /// `cmos`
    Cmos = 112,
    /// `config`
    Config = 113,
    /// `deassign`
    Deassign = 114,
    /// `default`
    Default = 115,
    /// `defparam`
    Defparam = 116,
    /// `design`
    Design = 117,
    /// `disable`
    Disable = 118,
    /// `edge`
    Edge = 119,
    /// `else`
    Else = 120,
    /// `end`
    End = 121,
    /// `endcase`
    Endcase = 122,
    /// `endconfig`
    Endconfig = 123,
    /// `endfunction`
    Endfunction = 124,
    /// `endgenerate`
    Endgenerate = 125,
    /// `endmodule`
    Endmodule = 126,
    /// `endprimitive`
    Endprimitive = 127,
    /// `endspecify`
    Endspecify = 128,
    /// `endtable`
    Endtable = 129,
    /// `endtask`
    Endtask = 130,
    /// `event`
    Event = 131,
    /// `for`
    For = 132,
    /// `force`
    Force = 133,
    /// `forever`
    Forever = 134,
    /// `fork`
    Fork = 135,
    /// `function`
    Function = 136,
    /// `generate`
    Generate = 137,
    /// `genvar`
    Genvar = 138,
    /// `highz0`
    Highz0 = 139,
    /// `highz1`
    Highz1 = 140,
    /// `if`
    If = 141,
    /// `ifnone`
    Ifnone = 142,
    /// `incdir`
    Incdir = 143,
    /// `include`
    Include = 144,
    /// `initial`
    Initial = 145,
    /// `inout`
    Inout = 146,
    /// `input`
    Input = 147,
    /// `instance`
    Instance = 148,
    /// `integer`
    Integer = 149,
    /// `join`
    Join = 150,
    /// `large`
    Large = 151,
    /// `liblist`
    Liblist = 152,
    /// `library`
    Library = 153,
    /// `localparam`
    Localparam = 154,
    /// `macromodule`
    Macromodule = 155,
    /// `medium`
    Medium = 156,
    /// `module`
    Module = 157,
    /// `nand`
    Nand = 158,
    /// `negedge`
    Negedge = 159,
    /// `nmos`
    Nmos = 160,
    /// `none` (only meaningful as a default net type)
    NetNone = 161,
    /// `nor`
    Nor = 162,
    /// `noshowcancelled`
    Noshowcancelled = 163,
    /// `not`
    Not = 164,
    /// `notif0`
    Notif0 = 165,
    /// `notif1`
    Notif1 = 166,
    /// `or`
    Or = 167,
    /// `output`
    Output = 168,
    /// `parameter`
    Parameter = 169,
    /// `pmos`
    Pmos = 170,
    /// `posedge`
    Posedge = 171,
    /// `primitive`
    Primitive = 172,
    /// `pull0`
    Pull0 = 173,
    /// `pull1`
    Pull1 = 174,
    /// `pulldown`
    Pulldown = 175,
    /// `pullup`
    Pullup = 176,
    /// `pulsestyle_ondetect`
    PulsestyleOndetect = 177,
    /// `pulsestyle_onevent`
    PulsestyleOnevent = 178,
    /// `rcmos`
    Rcmos = 179,
    /// `real`
    Real = 180,
    /// `realtime`
    Realtime = 181,
    /// `reg`
    Reg = 182,
    /// `release`
    Release = 183,
    /// `repeat`
    Repeat = 184,
    /// `rnmos`
    Rnmos = 185,
    /// `rpmos`
    Rpmos = 186,
    /// `rtran`
    Rtran = 187,
    /// `rtranif0`
    Rtranif0 = 188,
    /// `rtranif1`
    Rtranif1 = 189,
    /// `scalared`
    Scalared = 190,
    /// `showcancelled`
    Showcancelled = 191,
    /// `signed`
    Signed = 192,
    /// `small`
    Small = 193,
    /// `specify`
    Specify = 194,
    /// `specparam`
    Specparam = 195,
    /// `strong0`
    Strong0 = 196,
    /// `strong1`
    Strong1 = 197,
    /// `supply0`
    Supply0 = 198,
    /// `supply1`
    Supply1 = 199,
    /// `table`
    Table = 200,
    /// `task`
    Task = 201,
    /// `time`
    Time = 202,
    /// `tran`
    Tran = 203,
    /// `tranif0`
    Tranif0 = 204,
    /// `tranif1`
    Tranif1 = 205,
    /// `tri`
    Tri = 206,
    /// `tri0`
    Tri0 = 207,
    /// `tri1`
    Tri1 = 208,
    /// `triand`
    Triand = 209,
    /// `trior`
    Trior = 210,
    /// `trireg`
    Trireg = 211,
    /// `unsigned`
    Unsigned = 212,
    /// `use`
    Use = 213,
    /// `vectored`
    Vectored = 214,
    /// `wait`
    Wait = 215,
    /// `wand`
    Wand = 216,
    /// `weak0`
    Weak0 = 217,
    /// `weak1`
    Weak1 = 218,
    /// `while`
    While = 219,
    /// `wire`
    Wire = 220,
    /// `wor`
    Wor = 221,
    /// `xnor`
    Xnor = 222,
    /// `xor`
    Xor = 223,
}

impl VerilogToken {
    /// Returns the stable identifier of this token.
    pub fn id(self) -> TokenId {
        TokenId::from(self)
    }
}
