//! Tokenizer and recursive-descent parser for the calculator grammar
//!
//! The token set is closed: unsigned number literals, `+ - * / **` and
//! parentheses. Anything else is rejected before parsing starts, so there
//! is no route from user text to anything but arithmetic.

use std::fmt;

use crate::core::{EvalError, EvalResult, Operation, Value};

/// Maximum nesting of parentheses and unary signs
pub const MAX_DEPTH: usize = 256;

/// Maximum number of binary operators in one expression.
///
/// Operator chains build a left-deep tree, so this bounds the recursion of
/// evaluation and drop the way [`MAX_DEPTH`] bounds nesting.
pub const MAX_OPERATIONS: usize = 1024;

/// Token types from lexical analysis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(Value),
    /// Operator (binary, or a sign in prefix position)
    Operator(Operation),
    /// Left parenthesis
    LeftParen,
    /// Right parenthesis
    RightParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(op) => f.write_str(op.symbol()),
            Self::LeftParen => f.write_str("("),
            Self::RightParen => f.write_str(")"),
        }
    }
}

/// Abstract Syntax Tree node
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Numeric literal
    Number(Value),
    /// Binary operation
    BinaryOp {
        /// Left operand
        left: Box<AstNode>,
        /// Operator
        op: Operation,
        /// Right operand
        right: Box<AstNode>,
    },
    /// Unary negation
    Negate(Box<AstNode>),
}

impl AstNode {
    /// Creates a new number node
    #[must_use]
    pub fn number(value: Value) -> Self {
        Self::Number(value)
    }

    /// Creates a new binary operation node
    #[must_use]
    pub fn binary(left: AstNode, op: Operation, right: AstNode) -> Self {
        Self::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Creates a new negation node
    #[must_use]
    pub fn negate(inner: AstNode) -> Self {
        Self::Negate(Box::new(inner))
    }
}

/// Tokenizer for converting expression strings to tokens
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tokenizes the entire input
    pub fn tokenize(&mut self) -> EvalResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or None if at end of input
    pub fn next_token(&mut self) -> EvalResult<Option<Token>> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        let token = match ch {
            '0'..='9' | '.' => self.read_number()?,
            '+' => self.single(Token::Operator(Operation::Add)),
            '-' => self.single(Token::Operator(Operation::Subtract)),
            '/' => self.single(Token::Operator(Operation::Divide)),
            '*' => {
                self.advance();
                if self.current_char() == Some('*') {
                    self.advance();
                    Token::Operator(Operation::Power)
                } else {
                    Token::Operator(Operation::Multiply)
                }
            }
            '(' => self.single(Token::LeftParen),
            ')' => self.single(Token::RightParen),
            _ => {
                return Err(EvalError::UnexpectedCharacter {
                    ch,
                    position: self.pos,
                });
            }
        };

        Ok(Some(token))
    }

    fn single(&mut self, token: Token) -> Token {
        self.advance();
        token
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Reads digits with at most one decimal point.
    ///
    /// `5.` and `.5` are floats; a bare `.` is invalid. Integer literals
    /// may not start with `0` unless every digit is `0`.
    fn read_number(&mut self) -> EvalResult<Token> {
        let start = self.pos;
        let mut has_dot = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                self.advance();
            } else if ch == '.' && !has_dot {
                has_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        let literal = &self.input[start..self.pos];

        if has_dot {
            if literal == "." {
                return Err(EvalError::InvalidNumber(literal.to_string()));
            }
            let value: f64 = literal
                .parse()
                .map_err(|_| EvalError::InvalidNumber(literal.to_string()))?;
            return Ok(Token::Number(Value::Float(value)));
        }

        if literal.len() > 1 && literal.starts_with('0') && literal.bytes().any(|b| b != b'0') {
            return Err(EvalError::InvalidNumber(literal.to_string()));
        }

        // Only digits reach this point, so the sole failure is range overflow
        let value: i64 = literal.parse().map_err(|_| EvalError::Overflow)?;
        Ok(Token::Number(Value::Integer(value)))
    }
}

/// Recursive descent parser for expressions
///
/// Grammar:
/// ```text
/// expression ::= term (('+' | '-') term)*
/// term       ::= unary (('*' | '/') unary)*
/// unary      ::= ('-' | '+') unary | power
/// power      ::= primary ('**' unary)?    // Right associative
/// primary    ::= NUMBER | '(' expression ')'
/// ```
///
/// Exponentiation binds tighter than a sign on its left (`-2**2` is `-4`)
/// while its right operand may carry one (`2**-1` is `0.5`).
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    operations: usize,
}

impl Parser {
    /// Creates a new parser from tokens
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            operations: 0,
        }
    }

    /// Parses a string expression into an AST
    pub fn parse_str(input: &str) -> EvalResult<AstNode> {
        let mut tokenizer = Tokenizer::new(input);
        let tokens = tokenizer.tokenize()?;
        Self::new(tokens).parse()
    }

    /// Parses all tokens into an AST
    pub fn parse(&mut self) -> EvalResult<AstNode> {
        if self.tokens.is_empty() {
            return Err(EvalError::EmptyExpression);
        }

        let ast = self.parse_expression()?;

        if let Some(token) = self.current() {
            return Err(EvalError::UnexpectedToken {
                token: token.to_string(),
                position: self.pos,
            });
        }

        Ok(ast)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).copied();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn descend(&mut self) -> EvalResult<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(EvalError::NestingTooDeep(MAX_DEPTH));
        }
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    fn combine(&mut self, left: AstNode, op: Operation, right: AstNode) -> EvalResult<AstNode> {
        self.operations += 1;
        if self.operations > MAX_OPERATIONS {
            return Err(EvalError::TooManyOperations(MAX_OPERATIONS));
        }
        Ok(AstNode::binary(left, op, right))
    }

    fn parse_expression(&mut self) -> EvalResult<AstNode> {
        let mut left = self.parse_term()?;

        while let Some(&Token::Operator(op @ (Operation::Add | Operation::Subtract))) =
            self.current()
        {
            self.advance();
            let right = self.parse_term()?;
            left = self.combine(left, op, right)?;
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> EvalResult<AstNode> {
        let mut left = self.parse_unary()?;

        while let Some(&Token::Operator(op @ (Operation::Multiply | Operation::Divide))) =
            self.current()
        {
            self.advance();
            let right = self.parse_unary()?;
            left = self.combine(left, op, right)?;
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> EvalResult<AstNode> {
        match self.current() {
            Some(Token::Operator(Operation::Subtract)) => {
                self.advance();
                self.descend()?;
                let inner = self.parse_unary()?;
                self.ascend();
                Ok(AstNode::negate(inner))
            }
            Some(Token::Operator(Operation::Add)) => {
                self.advance();
                self.descend()?;
                let inner = self.parse_unary()?;
                self.ascend();
                Ok(inner)
            }
            _ => self.parse_power(),
        }
    }

    fn parse_power(&mut self) -> EvalResult<AstNode> {
        let base = self.parse_primary()?;

        if matches!(self.current(), Some(Token::Operator(Operation::Power))) {
            self.advance();
            self.descend()?;
            let exponent = self.parse_unary()?;
            self.ascend();
            return self.combine(base, Operation::Power, exponent);
        }

        Ok(base)
    }

    fn parse_primary(&mut self) -> EvalResult<AstNode> {
        let position = self.pos;
        let token = self.advance().ok_or(EvalError::UnexpectedEnd)?;

        match token {
            Token::Number(value) => Ok(AstNode::number(value)),
            Token::LeftParen => {
                self.descend()?;
                let expr = self.parse_expression()?;
                self.ascend();
                match self.advance() {
                    Some(Token::RightParen) => Ok(expr),
                    Some(other) => Err(EvalError::UnexpectedToken {
                        token: other.to_string(),
                        position: self.pos - 1,
                    }),
                    None => Err(EvalError::UnclosedParenthesis),
                }
            }
            other => Err(EvalError::UnexpectedToken {
                token: other.to_string(),
                position,
            }),
        }
    }
}
