// Shunting-yard parser for mep expressions.
//
// Grammar (no left recursion):
//
//     Expr := Term { BinaryOp Term }
//     Term := Value | '(' Expr ')' | Function '(' Expr ')' | Sign Term
//
// The operator stack always starts with a sentinel, and every parenthesised
// scope pushes another one, so reductions never cross a scope boundary.

pub mod diagnostics;
pub mod error;

use mep_ast::Node;
use mep_lexer::{Lexer, Location, Operator, Token, TokenKind};

use self::error::ParseError;

/// Parses `text` into an expression tree.
///
/// ```
/// use mep_parser::parse;
///
/// let tree = parse("2^3^2").unwrap();
/// assert_eq!(tree.to_string(), "(2.00 ^ (3.00 ^ 2.00))");
/// ```
pub fn parse(text: &str) -> Result<Node, ParseError> {
    Parser::new(text).parse()
}

/// Parser state for a single input.
///
/// Both stacks are owned by the parser, so everything still on them is
/// dropped with it when parsing fails.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    /// Pending operators, bottom-guarded by [`Operator::Sentinel`]
    operators: Vec<Operator>,
    /// Partially built subtrees
    operands: Vec<Node>,
}

impl<'a> Parser<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lexer: Lexer::new(text),
            operators: Vec::new(),
            operands: Vec::new(),
        }
    }

    /// Parses the whole input, which must hold exactly one expression.
    pub fn parse(mut self) -> Result<Node, ParseError> {
        log::debug!("parse {:?}", self.lexer.source());

        self.operators.push(Operator::Sentinel);
        self.parse_expr()?;

        let next = self.lexer.peek()?;
        match next.kind {
            TokenKind::EndOfInput => {}
            TokenKind::RightParen => {
                return Err(ParseError::at_token(next, "unbalanced `)`"));
            }
            _ => {
                let message = format!("unexpected {} after a complete expression", next.kind);
                return Err(ParseError::at_token(next, message));
            }
        }

        self.close_scope()?;
        if !self.operators.is_empty() {
            return Err(self.internal_error("operators left after the outer scope"));
        }

        let root = self.pop_operand()?;
        if !self.operands.is_empty() {
            return Err(self.internal_error("more than one tree left after parsing"));
        }

        log::debug!("parsed {root}");
        Ok(root)
    }

    /// `Expr := Term { BinaryOp Term }`
    fn parse_expr(&mut self) -> Result<(), ParseError> {
        self.parse_term()?;

        while let TokenKind::BinaryOp(op) = self.lexer.peek()?.kind {
            self.lexer.consume();
            self.insert_operator(op.into())?;
            self.parse_term()?;
        }

        let mut top = self.top();
        while top != Operator::Sentinel {
            top = self.reduce_top()?;
        }
        Ok(())
    }

    /// `Term := Value | '(' Expr ')' | Function '(' Expr ')' | Sign Term`
    fn parse_term(&mut self) -> Result<(), ParseError> {
        let token = self.lexer.peek()?;
        match token.kind {
            TokenKind::Term { ref text, .. } => {
                let node = Node::terminal(text.as_str());
                self.lexer.consume();
                self.operands.push(node);
                Ok(())
            }
            TokenKind::LeftParen => {
                self.lexer.consume();
                self.parse_group()
            }
            TokenKind::UnaryOp(function) if function.is_sign() => {
                let chained = self.lexer.previous().is_some_and(Token::is_sign);
                self.lexer.consume();

                let op = Operator::from(function);
                if chained && op.is_negate() && self.top().is_negate() {
                    // --x is x
                    log::trace!("cancelled double negation");
                    self.operators.pop();
                } else if chained {
                    self.operators.push(op);
                } else {
                    self.insert_operator(op)?;
                }
                self.parse_term()
            }
            TokenKind::UnaryOp(function) => {
                self.lexer.consume();
                self.insert_operator(function.into())?;

                let next = self.lexer.peek()?;
                if next.kind != TokenKind::LeftParen {
                    let message = format!("expected `(` after function `{function}`, found {}", next.kind);
                    return Err(ParseError::at_token(next, message));
                }
                self.lexer.consume();
                self.parse_group()
            }
            _ => {
                let message = format!(
                    "expected a number, a variable, `(` or a prefix operator, found {}",
                    token.kind
                );
                Err(ParseError::at_token(token, message))
            }
        }
    }

    /// The rest of a parenthesised group, after its `(` was consumed.
    fn parse_group(&mut self) -> Result<(), ParseError> {
        self.operators.push(Operator::Sentinel);
        self.parse_expr()?;

        let next = self.lexer.peek()?;
        if next.kind != TokenKind::RightParen {
            let message = format!("missing `)`, found {}", next.kind);
            return Err(ParseError::at_token(next, message));
        }
        self.lexer.consume();
        self.close_scope()
    }

    /// Reduces while the stack top binds at least as tightly as `op`, then
    /// pushes `op`.
    fn insert_operator(&mut self, op: Operator) -> Result<(), ParseError> {
        let mut top = self.top();
        while top.reduces_before(op) {
            top = self.reduce_top()?;
        }
        log::trace!("push {op} over {top}");
        self.operators.push(op);
        Ok(())
    }

    /// Pops one operator, combines it with its operands into a subtree and
    /// pushes the subtree. Returns the new top of the operator stack.
    fn reduce_top(&mut self) -> Result<Operator, ParseError> {
        let node = match self.operators.pop() {
            Some(Operator::Binary(op)) => {
                let right = self.pop_operand()?;
                let left = self.pop_operand()?;
                Node::binary(op, left, right)
            }
            Some(Operator::Apply(function)) => {
                let child = self.pop_operand()?;
                Node::unary(function, child)
            }
            Some(Operator::Sentinel) | None => {
                return Err(self.internal_error("reduce crossed a scope boundary"));
            }
        };
        log::trace!("reduced {node}");
        self.operands.push(node);
        Ok(self.top())
    }

    /// Pops the sentinel that opened the current scope.
    fn close_scope(&mut self) -> Result<(), ParseError> {
        match self.operators.pop() {
            Some(Operator::Sentinel) => Ok(()),
            _ => Err(self.internal_error("scope closed with pending operators")),
        }
    }

    fn pop_operand(&mut self) -> Result<Node, ParseError> {
        self.operands
            .pop()
            .ok_or_else(|| self.internal_error("operator without operand"))
    }

    fn top(&self) -> Operator {
        self.operators.last().copied().unwrap_or(Operator::Sentinel)
    }

    /// Broken stack invariants are reported at the last consumed token.
    fn internal_error(&self, message: &str) -> ParseError {
        match self.lexer.previous() {
            Some(token) => ParseError::at_token(token, message),
            None => ParseError::Syntax {
                message: message.to_string(),
                location: Location::start(),
                lexeme: String::new(),
            },
        }
    }
}
