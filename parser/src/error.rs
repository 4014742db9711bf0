use snafu::Snafu;

/// First grammar violation found while parsing. `found` fields hold a
/// printable description of the offending token, or `end of input`.
#[derive(Debug, Snafu, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[snafu(display("expecting {expected}, instead found {found}"))]
    UnexpectedToken { expected: String, found: String },

    #[snafu(display("identifier expected, found {found}"))]
    ExpectedIdentifier { found: String },

    #[snafu(display("basic type expected, found {found}"))]
    ExpectedType { found: String },

    #[snafu(display("numeric constant expected after '[', found {found}"))]
    ExpectedVectorLength { found: String },

    #[snafu(display("vector length must be positive, found {lexeme}"))]
    InvalidVectorLength { lexeme: String },

    #[snafu(display("integer constant {lexeme} is out of range"))]
    IntegerOutOfRange { lexeme: String },

    #[snafu(display("chained comparison: '{operator}' cannot follow another relational operator"))]
    ChainedComparison { operator: String },

    #[snafu(display("no valid statement starts with {found}"))]
    ExpectedStatement { found: String },

    #[snafu(display("expression expected, found {found}"))]
    ExpectedFactor { found: String },

    #[snafu(display("program nests deeper than {limit} levels"))]
    NestingTooDeep { limit: usize },

    #[snafu(display("unexpected trailing input after program: {found}"))]
    TrailingInput { found: String },
}
