//! The Pratt parser: folds a token list into expressions and
//! statements, redistributing filler tokens onto the structural token
//! that immediately follows them.

use crate::tokenization::{Token, TokenKind};

use super::error::ParsingError;
use super::expression::{
    AnnotatedIdentifier, Assignment, BinaryArithmeticOperation, BinaryComparison, Block, Call,
    Conditional, Expression, FunctionDefinition, Grouping, Identifier, MemberAccess,
    NumericLiteral, NumericLiteralType, Tuple, UnaryArithmeticOperation,
};
use super::filler::Filler;
use super::operator::{
    BinaryAnnotationOperator, BinaryArithmeticOperator, BinaryAssignmentOperator,
    BinaryComparisonOperator, CallOperator, MemberAccessOperator, UnaryNegationOperator,
};
use super::precedence::{Associativity, Precedence};
use super::statement::{ExpressionStatement, Statement};

/// A random-access cursor over a token list that separates structural
/// tokens from filler trivia.
///
/// Fillers are never consumed as syntax: every call to
/// [`Cursor::next_structural`] collects the contiguous filler run
/// immediately preceding the structural token it returns, per the
/// filler redistribution rule.
struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
    last_token: Option<Token>,
}

impl Cursor {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            last_token: None,
        }
    }

    fn peek_structural_kind(&self) -> Option<TokenKind> {
        self.tokens[self.pos..]
            .iter()
            .find(|token| !token.content.kind.is_filler())
            .map(|token| token.content.kind)
    }

    fn peek_structural_string(&self) -> Option<&str> {
        self.tokens[self.pos..]
            .iter()
            .find(|token| !token.content.kind.is_filler())
            .map(|token| token.content.string.as_str())
    }

    fn only_fillers_remain(&self) -> bool {
        self.tokens[self.pos..]
            .iter()
            .all(|token| token.content.kind.is_filler())
    }

    /// Consumes the leading filler run plus the next structural token.
    ///
    /// Must only be called when [`Cursor::only_fillers_remain`] is
    /// `false` — otherwise any fillers encountered before hitting the
    /// end of input would be silently dropped instead of surfacing via
    /// [`Cursor::take_trailing_fillers`].
    fn next_structural(&mut self) -> Option<(Vec<Filler>, Token)> {
        let mut fillers = Vec::new();
        while let Some(token) = self.tokens.get(self.pos) {
            if !token.content.kind.is_filler() {
                break;
            }
            fillers.push(Filler::from_token(token.clone()));
            self.pos += 1;
        }
        let token = self.tokens.get(self.pos)?.clone();
        self.pos += 1;
        self.last_token = Some(token.clone());
        Some((fillers, token))
    }

    fn take_trailing_fillers(&mut self) -> Vec<Filler> {
        let fillers = self.tokens[self.pos..]
            .iter()
            .cloned()
            .map(Filler::from_token)
            .collect();
        self.pos = self.tokens.len();
        fillers
    }

    fn last_token(&self) -> Option<&Token> {
        self.last_token.as_ref()
    }
}

/// Parses an entire token list into top-level statements plus trailing
/// fillers, per §4.2.3's script assembly rule.
pub(crate) fn parse_script(
    tokens: Vec<Token>,
) -> Result<(Vec<Statement>, Vec<Filler>), ParsingError> {
    let mut cursor = Cursor::new(tokens);
    let mut statements = Vec::new();

    loop {
        if cursor.only_fillers_remain() {
            return Ok((statements, cursor.take_trailing_fillers()));
        }

        let expression = parse_expression(&mut cursor, Precedence::MIN)?;

        if cursor.peek_structural_kind() == Some(TokenKind::Semicolon) {
            let (semicolon_fillers, semicolon_token) = cursor
                .next_structural()
                .expect("peek_structural_kind returned Some(Semicolon)");
            statements.push(Statement::ExpressionStatement(ExpressionStatement {
                expression,
                semicolon_position: semicolon_token.position,
                semicolon_fillers,
            }));
        } else {
            let token = cursor
                .last_token()
                .cloned()
                .expect("parse_expression always consumes at least one token");
            return Err(ParsingError::MissingSemicolon { token });
        }
    }
}

fn parse_expression(cursor: &mut Cursor, min_precedence: Precedence) -> Result<Expression, ParsingError> {
    let mut left = parse_atom(cursor)?;

    loop {
        let Some(kind) = cursor.peek_structural_kind() else {
            break;
        };
        let Some(precedence) = infix_precedence(kind) else {
            break;
        };
        if precedence < min_precedence {
            break;
        }
        left = parse_infix(cursor, left, kind, precedence)?;
    }

    Ok(left)
}

fn infix_precedence(kind: TokenKind) -> Option<Precedence> {
    if let Some(operator) = BinaryArithmeticOperator::from_token_kind(kind) {
        return Some(operator.precedence());
    }
    if let Some(operator) = BinaryComparisonOperator::from_token_kind(kind) {
        return Some(operator.precedence());
    }
    match kind {
        TokenKind::Assignment => Some(BinaryAssignmentOperator::PRECEDENCE),
        TokenKind::Colon => Some(BinaryAnnotationOperator::PRECEDENCE),
        TokenKind::Dot => Some(MemberAccessOperator::PRECEDENCE),
        TokenKind::OpenParenthesis => Some(CallOperator::PRECEDENCE),
        _ => None,
    }
}

fn right_operand_min_precedence(precedence: Precedence, associativity: Associativity) -> Precedence {
    match associativity {
        Associativity::LeftToRight => Precedence::new(precedence.get() + 1),
        Associativity::RightToLeft => precedence,
    }
}

fn parse_infix(
    cursor: &mut Cursor,
    left: Expression,
    kind: TokenKind,
    precedence: Precedence,
) -> Result<Expression, ParsingError> {
    match kind {
        TokenKind::OpenParenthesis => parse_call(cursor, left),
        TokenKind::Dot => parse_member_access(cursor, left),
        TokenKind::Colon => parse_annotation(cursor, left),
        TokenKind::Assignment => parse_assignment(cursor, left),
        _ if BinaryArithmeticOperator::from_token_kind(kind).is_some() => {
            parse_binary_arithmetic(cursor, left, kind, precedence)
        }
        _ if BinaryComparisonOperator::from_token_kind(kind).is_some() => {
            parse_binary_comparison(cursor, left, kind, precedence)
        }
        _ => unreachable!("infix_precedence only returns Some for the kinds matched above"),
    }
}

fn parse_binary_arithmetic(
    cursor: &mut Cursor,
    left: Expression,
    kind: TokenKind,
    precedence: Precedence,
) -> Result<Expression, ParsingError> {
    let operator =
        BinaryArithmeticOperator::from_token_kind(kind).expect("kind dispatched as arithmetic");
    let (fillers, token) = cursor
        .next_structural()
        .expect("peek_structural_kind returned this kind");
    let right = parse_expression(
        cursor,
        right_operand_min_precedence(precedence, operator.associativity()),
    )?;
    Ok(Expression::BinaryArithmeticOperation(BinaryArithmeticOperation {
        left: Box::new(left),
        right: Box::new(right),
        operator,
        operator_position: token.position,
        operator_fillers: fillers,
    }))
}

fn parse_binary_comparison(
    cursor: &mut Cursor,
    left: Expression,
    kind: TokenKind,
    precedence: Precedence,
) -> Result<Expression, ParsingError> {
    let operator =
        BinaryComparisonOperator::from_token_kind(kind).expect("kind dispatched as comparison");
    let (fillers, token) = cursor
        .next_structural()
        .expect("peek_structural_kind returned this kind");
    let right = parse_expression(
        cursor,
        right_operand_min_precedence(precedence, operator.associativity()),
    )?;
    Ok(Expression::BinaryComparison(BinaryComparison {
        left: Box::new(left),
        right: Box::new(right),
        operator,
        operator_position: token.position,
        operator_fillers: fillers,
    }))
}

fn parse_assignment(cursor: &mut Cursor, left: Expression) -> Result<Expression, ParsingError> {
    let (fillers, token) = cursor
        .next_structural()
        .expect("peek_structural_kind returned Some(Assignment)");
    let right = parse_expression(cursor, BinaryAssignmentOperator::PRECEDENCE)?;
    Ok(Expression::Assignment(Assignment {
        target: Box::new(left),
        value: Box::new(right),
        operator_position: token.position,
        operator_fillers: fillers,
    }))
}

fn parse_annotation(cursor: &mut Cursor, left: Expression) -> Result<Expression, ParsingError> {
    let identifier = match left {
        Expression::Identifier(identifier) => identifier,
        other => {
            let position = other.leading_position();
            return Err(ParsingError::UnexpectedExpression {
                expression: Box::new(other),
                position,
            });
        }
    };
    let (fillers, token) = cursor
        .next_structural()
        .expect("peek_structural_kind returned Some(Colon)");
    let annotation = parse_expression(cursor, BinaryAnnotationOperator::PRECEDENCE)?;
    Ok(Expression::AnnotatedIdentifier(AnnotatedIdentifier {
        identifier,
        annotation: Box::new(annotation),
        operator_position: token.position,
        operator_fillers: fillers,
    }))
}

fn parse_member_access(cursor: &mut Cursor, left: Expression) -> Result<Expression, ParsingError> {
    let (fillers, token) = cursor
        .next_structural()
        .expect("peek_structural_kind returned Some(Dot)");

    let member = match cursor.peek_structural_kind() {
        Some(TokenKind::Identifier) => {
            let (member_fillers, member_token) = cursor
                .next_structural()
                .expect("peek_structural_kind returned Some(Identifier)");
            Identifier {
                string: member_token.content.string,
                position: member_token.position,
                fillers: member_fillers,
            }
        }
        Some(_) => {
            let (_, bad_token) = cursor.next_structural().expect("peeked Some above");
            return Err(ParsingError::UnexpectedToken { token: bad_token });
        }
        None => return Err(ParsingError::OutOfTokens),
    };

    Ok(Expression::MemberAccess(MemberAccess {
        object: Box::new(left),
        member,
        operator_position: token.position,
        operator_fillers: fillers,
    }))
}

fn parse_call(cursor: &mut Cursor, left: Expression) -> Result<Expression, ParsingError> {
    let (open_fillers, open_token) = cursor
        .next_structural()
        .expect("peek_structural_kind returned Some(OpenParenthesis)");
    let open_position = open_token.position;

    let (arguments, commas_positions, commas_fillers) =
        parse_comma_separated(cursor, open_position, TokenKind::CloseParenthesis, |c| {
            parse_expression(c, Precedence::MIN)
        })?;

    let Some((close_fillers, close_token)) = cursor.next_structural() else {
        return Err(ParsingError::MismatchedOpenParenthesis {
            position: open_position,
        });
    };

    Ok(Expression::Call(Call {
        callable: Box::new(left),
        arguments,
        open_parenthesis_position: open_position,
        commas_positions,
        close_parenthesis_position: close_token.position,
        open_parenthesis_fillers: open_fillers,
        commas_fillers,
        close_parenthesis_fillers: close_fillers,
    }))
}

/// Parses a `,`-separated, optionally trailing-comma-terminated list up
/// to (but not including) the closing token, shared by call arguments,
/// tuple/grouping elements, and function parameter lists.
fn parse_comma_separated<T>(
    cursor: &mut Cursor,
    open_position: crate::tokenization::SubstringPosition,
    closer: TokenKind,
    mut parse_element: impl FnMut(&mut Cursor) -> Result<T, ParsingError>,
) -> Result<(Vec<T>, Vec<crate::tokenization::SubstringPosition>, Vec<Vec<Filler>>), ParsingError> {
    let mut elements = Vec::new();
    let mut commas_positions = Vec::new();
    let mut commas_fillers = Vec::new();

    if cursor.peek_structural_kind() == Some(closer) {
        return Ok((elements, commas_positions, commas_fillers));
    }

    loop {
        elements.push(parse_element(cursor)?);

        match cursor.peek_structural_kind() {
            Some(kind) if kind == TokenKind::Comma => {
                let (fillers, token) = cursor
                    .next_structural()
                    .expect("peek_structural_kind returned Some(Comma)");
                commas_positions.push(token.position);
                commas_fillers.push(fillers);
                if cursor.peek_structural_kind() == Some(closer) {
                    break;
                }
            }
            Some(kind) if kind == closer => break,
            Some(_) => {
                let (_, token) = cursor.next_structural().expect("peeked Some above");
                return Err(ParsingError::UnexpectedToken { token });
            }
            None => {
                return Err(if closer == TokenKind::CloseBrace {
                    ParsingError::MismatchedOpenBrace {
                        position: open_position,
                    }
                } else {
                    ParsingError::MismatchedOpenParenthesis {
                        position: open_position,
                    }
                });
            }
        }
    }

    Ok((elements, commas_positions, commas_fillers))
}

fn parse_atom(cursor: &mut Cursor) -> Result<Expression, ParsingError> {
    let Some(kind) = cursor.peek_structural_kind() else {
        return Err(ParsingError::OutOfTokens);
    };

    match kind {
        TokenKind::Identifier => {
            let string = cursor
                .peek_structural_string()
                .expect("peek_structural_kind returned Some(Identifier)")
                .to_string();
            match string.as_str() {
                "if" => parse_conditional(cursor),
                "Function" => parse_function_definition(cursor),
                _ => {
                    let (fillers, token) = cursor.next_structural().expect("peeked Some above");
                    Ok(Expression::Identifier(Identifier {
                        string: token.content.string,
                        position: token.position,
                        fillers,
                    }))
                }
            }
        }
        k if k.is_numeric_literal() => {
            let (fillers, token) = cursor.next_structural().expect("peeked Some above");
            parse_numeric_literal(token, fillers)
        }
        TokenKind::Minus => parse_unary_negation(cursor),
        TokenKind::OpenParenthesis => parse_parenthesized(cursor),
        TokenKind::OpenBrace => parse_block(cursor).map(Expression::Block),
        _ => {
            let (_, token) = cursor.next_structural().expect("peeked Some above");
            Err(ParsingError::UnexpectedToken { token })
        }
    }
}

fn parse_numeric_literal(token: Token, fillers: Vec<Filler>) -> Result<Expression, ParsingError> {
    // The lexer only ever hands back numeric-literal tokens of the form
    // `<value>_<suffix>`, so the split always succeeds.
    let underscore = token
        .content
        .string
        .rfind('_')
        .expect("numeric literal token string always contains a mandatory '_'");
    let value = token.content.string[..underscore].to_string();
    let suffix = &token.content.string[underscore + 1..];
    let type_ = NumericLiteralType::from_suffix(suffix)
        .expect("lexer already validated the type suffix");

    Ok(Expression::NumericLiteral(NumericLiteral {
        value,
        type_,
        position: token.position,
        fillers,
    }))
}

fn parse_unary_negation(cursor: &mut Cursor) -> Result<Expression, ParsingError> {
    let (fillers, token) = cursor
        .next_structural()
        .expect("peek_structural_kind returned Some(Minus)");
    let operand = parse_expression(cursor, UnaryNegationOperator::PRECEDENCE)?;
    Ok(Expression::UnaryArithmeticOperation(UnaryArithmeticOperation {
        operand: Box::new(operand),
        operator: UnaryNegationOperator,
        operator_position: token.position,
        operator_fillers: fillers,
    }))
}

fn parse_parenthesized(cursor: &mut Cursor) -> Result<Expression, ParsingError> {
    let (open_fillers, open_token) = cursor
        .next_structural()
        .expect("peek_structural_kind returned Some(OpenParenthesis)");
    let open_position = open_token.position;

    if cursor.peek_structural_kind() == Some(TokenKind::CloseParenthesis) {
        let (close_fillers, close_token) = cursor
            .next_structural()
            .expect("peek_structural_kind returned Some(CloseParenthesis)");
        return Ok(Expression::Tuple(Tuple {
            elements: Vec::new(),
            open_parenthesis_position: open_position,
            commas_positions: Vec::new(),
            close_parenthesis_position: close_token.position,
            open_parenthesis_fillers: open_fillers,
            commas_fillers: Vec::new(),
            close_parenthesis_fillers: close_fillers,
        }));
    }

    let first = parse_expression(cursor, Precedence::MIN)?;

    match cursor.peek_structural_kind() {
        Some(TokenKind::CloseParenthesis) => {
            let (close_fillers, close_token) = cursor
                .next_structural()
                .expect("peek_structural_kind returned Some(CloseParenthesis)");
            Ok(Expression::Grouping(Grouping {
                expression: Box::new(first),
                open_parenthesis_position: open_position,
                close_parenthesis_position: close_token.position,
                open_parenthesis_fillers: open_fillers,
                close_parenthesis_fillers: close_fillers,
            }))
        }
        Some(TokenKind::Comma) => {
            let mut elements = vec![first];
            let mut commas_positions = Vec::new();
            let mut commas_fillers = Vec::new();

            loop {
                let (fillers, token) = cursor
                    .next_structural()
                    .expect("peek_structural_kind returned Some(Comma)");
                commas_positions.push(token.position);
                commas_fillers.push(fillers);

                if cursor.peek_structural_kind() == Some(TokenKind::CloseParenthesis) {
                    break;
                }
                elements.push(parse_expression(cursor, Precedence::MIN)?);

                match cursor.peek_structural_kind() {
                    Some(TokenKind::Comma) => continue,
                    Some(TokenKind::CloseParenthesis) => break,
                    Some(_) => {
                        let (_, token) = cursor.next_structural().expect("peeked Some above");
                        return Err(ParsingError::UnexpectedToken { token });
                    }
                    None => {
                        return Err(ParsingError::MismatchedOpenParenthesis {
                            position: open_position,
                        });
                    }
                }
            }

            let Some((close_fillers, close_token)) = cursor.next_structural() else {
                return Err(ParsingError::MismatchedOpenParenthesis {
                    position: open_position,
                });
            };

            Ok(Expression::Tuple(Tuple {
                elements,
                open_parenthesis_position: open_position,
                commas_positions,
                close_parenthesis_position: close_token.position,
                open_parenthesis_fillers: open_fillers,
                commas_fillers,
                close_parenthesis_fillers: close_fillers,
            }))
        }
        Some(_) => {
            let (_, token) = cursor.next_structural().expect("peeked Some above");
            Err(ParsingError::UnexpectedToken { token })
        }
        None => Err(ParsingError::MismatchedOpenParenthesis {
            position: open_position,
        }),
    }
}

fn parse_block(cursor: &mut Cursor) -> Result<Block, ParsingError> {
    let (open_fillers, open_token) = cursor
        .next_structural()
        .expect("peek_structural_kind returned Some(OpenBrace)");
    let open_position = open_token.position;

    let mut statements = Vec::new();
    let mut trailing_expression = None;

    loop {
        match cursor.peek_structural_kind() {
            Some(TokenKind::CloseBrace) => break,
            None => {
                return Err(ParsingError::MismatchedOpenBrace {
                    position: open_position,
                });
            }
            Some(_) => {}
        }

        let expression = parse_expression(cursor, Precedence::MIN)?;

        match cursor.peek_structural_kind() {
            Some(TokenKind::Semicolon) => {
                let (semicolon_fillers, semicolon_token) = cursor
                    .next_structural()
                    .expect("peek_structural_kind returned Some(Semicolon)");
                statements.push(Statement::ExpressionStatement(ExpressionStatement {
                    expression,
                    semicolon_position: semicolon_token.position,
                    semicolon_fillers,
                }));
            }
            Some(TokenKind::CloseBrace) | None => {
                trailing_expression = Some(Box::new(expression));
                break;
            }
            Some(_) => {
                let token = cursor
                    .last_token()
                    .cloned()
                    .expect("parse_expression always consumes at least one token");
                return Err(ParsingError::MissingSemicolon { token });
            }
        }
    }

    let Some((close_fillers, close_token)) = cursor.next_structural() else {
        return Err(ParsingError::MismatchedOpenBrace {
            position: open_position,
        });
    };

    Ok(Block {
        statements,
        expression: trailing_expression,
        open_brace_position: open_position,
        close_brace_position: close_token.position,
        open_brace_fillers: open_fillers,
        close_brace_fillers: close_fillers,
    })
}

fn parse_conditional(cursor: &mut Cursor) -> Result<Expression, ParsingError> {
    let (opener_fillers, opener_token) = cursor
        .next_structural()
        .expect("peeked Identifier(\"if\")");
    let opener_position = opener_token.position;

    let antecedent = parse_expression(cursor, Precedence::MIN)?;

    if cursor.peek_structural_kind() != Some(TokenKind::OpenBrace) {
        return Err(match cursor.next_structural() {
            Some((_, token)) => ParsingError::UnexpectedToken { token },
            None => ParsingError::OutOfTokens,
        });
    }
    let consequent = parse_block(cursor)?;

    let mut alternative = None;
    let mut alternative_opener_position = None;
    let mut alternative_opener_fillers = Vec::new();

    if cursor.peek_structural_kind() == Some(TokenKind::Identifier)
        && cursor.peek_structural_string() == Some("else")
    {
        let (fillers, token) = cursor
            .next_structural()
            .expect("peeked Identifier(\"else\")");
        alternative_opener_position = Some(token.position);
        alternative_opener_fillers = fillers;

        let next = match cursor.peek_structural_kind() {
            Some(TokenKind::Identifier) if cursor.peek_structural_string() == Some("if") => {
                parse_conditional(cursor)?
            }
            Some(TokenKind::OpenBrace) => Expression::Block(parse_block(cursor)?),
            Some(_) => {
                let (_, token) = cursor.next_structural().expect("peeked Some above");
                return Err(ParsingError::UnexpectedToken { token });
            }
            None => return Err(ParsingError::OutOfTokens),
        };
        alternative = Some(Box::new(next));
    }

    Ok(Expression::Conditional(Conditional {
        antecedent: Box::new(antecedent),
        consequent,
        alternative,
        opener_position,
        alternative_opener_position,
        opener_fillers,
        alternative_opener_fillers,
    }))
}

fn parse_function_definition(cursor: &mut Cursor) -> Result<Expression, ParsingError> {
    let (opener_fillers, opener_token) = cursor
        .next_structural()
        .expect("peeked Identifier(\"Function\")");
    let opener_position = opener_token.position;

    if cursor.peek_structural_kind() != Some(TokenKind::OpenParenthesis) {
        return Err(match cursor.next_structural() {
            Some((_, token)) => ParsingError::UnexpectedToken { token },
            None => ParsingError::OutOfTokens,
        });
    }
    let (open_parenthesis_fillers, open_parenthesis_token) = cursor
        .next_structural()
        .expect("peek_structural_kind returned Some(OpenParenthesis)");
    let open_parenthesis_position = open_parenthesis_token.position;

    let (parameters, commas_positions, commas_fillers) = parse_comma_separated(
        cursor,
        open_parenthesis_position,
        TokenKind::CloseParenthesis,
        parse_annotated_identifier,
    )?;

    let Some((close_parenthesis_fillers, close_parenthesis_token)) = cursor.next_structural()
    else {
        return Err(ParsingError::MismatchedOpenParenthesis {
            position: open_parenthesis_position,
        });
    };
    let close_parenthesis_position = close_parenthesis_token.position;

    if cursor.peek_structural_kind() != Some(TokenKind::Arrow) {
        return Err(match cursor.next_structural() {
            Some((_, token)) => ParsingError::UnexpectedToken { token },
            None => ParsingError::OutOfTokens,
        });
    }
    let (arrow_fillers, arrow_token) = cursor
        .next_structural()
        .expect("peek_structural_kind returned Some(Arrow)");
    let arrow_position = arrow_token.position;

    let return_type = parse_expression(cursor, Precedence::MIN)?;

    if cursor.peek_structural_kind() != Some(TokenKind::OpenBrace) {
        return Err(match cursor.next_structural() {
            Some((_, token)) => ParsingError::UnexpectedToken { token },
            None => ParsingError::OutOfTokens,
        });
    }
    let body = parse_block(cursor)?;

    Ok(Expression::FunctionDefinition(FunctionDefinition {
        parameters,
        return_type: Box::new(return_type),
        body,
        opener_position,
        open_parenthesis_position,
        commas_positions,
        close_parenthesis_position,
        arrow_position,
        opener_fillers,
        open_parenthesis_fillers,
        commas_fillers,
        close_parenthesis_fillers,
        arrow_fillers,
    }))
}

fn parse_annotated_identifier(cursor: &mut Cursor) -> Result<AnnotatedIdentifier, ParsingError> {
    match parse_expression(cursor, Precedence::MIN)? {
        Expression::AnnotatedIdentifier(annotated) => Ok(annotated),
        other => {
            let position = other.leading_position();
            Err(ParsingError::UnexpectedExpression {
                expression: Box::new(other),
                position,
            })
        }
    }
}
