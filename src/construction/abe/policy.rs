// Copyright © 2024 Marvin Beckmann
//
// This file is part of fe-rs.
//
// fe-rs is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the monotone span program (MSP) representation of
//! decryption policies together with a compiler from boolean formulas over
//! `AND`, `OR` and attribute names, following the insertion construction of
//! [\[1\]](<../../index.html#:~:text=[1]>), Appendix G.
//!
//! A set of rows of the resulting matrix spans the target vector
//! `(1, 0, ..., 0)` exactly if the corresponding attributes satisfy the
//! formula. The reconstruction coefficients are found by Gaussian
//! elimination over the scalar field of the pairing group.

use crate::error::CryptoError;
use qfall_math::{
    integer::{MatZ, Z},
    traits::{GetEntry, GetNumColumns, SetEntry},
};
use rabe_bn::Fr;
use serde::{Deserialize, Serialize};

/// A monotone span program: an integer matrix together with a map from its
/// rows to attribute names.
///
/// Attributes:
/// - `mat`: the share-generating matrix
/// - `row_to_attrib`: the attribute labeling the respective row of `mat`
///
/// # Examples
/// ```
/// use fe_rs::construction::abe::Msp;
///
/// let msp = Msp::from_boolean_formula("(1 OR 4) AND (2 OR (0 AND 5))").unwrap();
///
/// assert_eq!(vec!["1", "4", "2", "0", "5"], msp.row_to_attrib);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Msp {
    pub mat: MatZ,
    pub row_to_attrib: Vec<String>,
}

/// Binary AST of a boolean formula over `AND`, `OR`, and attribute names.
enum Node {
    Leaf(String),
    And(Box<Node>, Box<Node>),
    Or(Box<Node>, Box<Node>),
}

impl Msp {
    /// Compiles a boolean formula into an MSP whose rows, restricted to a
    /// satisfying set of attributes, span the target vector
    /// `(1, 0, ..., 0)`.
    ///
    /// The formula is built from attribute names, `AND`, `OR`, and
    /// parentheses, separated by whitespace. `AND` binds tighter than `OR`;
    /// both are left-associative. Attribute names must not contain
    /// parentheses, whitespace, or the reserved words as substrings; decimal
    /// integers are valid names.
    ///
    /// Parameters:
    /// - `formula`: specifies the boolean formula describing the policy
    ///
    /// Returns the compiled [`Msp`] or a [`CryptoError`] of type
    /// [`ParseError`](CryptoError::ParseError) if the formula is malformed.
    ///
    /// # Examples
    /// ```
    /// use fe_rs::construction::abe::Msp;
    ///
    /// let msp = Msp::from_boolean_formula("clearance AND (finance OR audit)").unwrap();
    ///
    /// assert_eq!(3, msp.row_to_attrib.len());
    /// ```
    pub fn from_boolean_formula(formula: &str) -> Result<Self, CryptoError> {
        let tokens = tokenize(formula);
        let mut parser = Parser { tokens: &tokens, pos: 0 };
        let ast = parser.parse_or()?;
        if parser.pos != tokens.len() {
            return Err(CryptoError::ParseError(format!(
                "Unexpected token '{}'.",
                tokens[parser.pos]
            )));
        }

        let mut columns = 1;
        let mut labeled_rows = Vec::new();
        assign_labels(&ast, vec![1], &mut columns, &mut labeled_rows);

        let mut mat = MatZ::new(labeled_rows.len() as i64, columns as i64);
        let mut row_to_attrib = Vec::with_capacity(labeled_rows.len());
        for (i, (attrib, label)) in labeled_rows.into_iter().enumerate() {
            for (j, value) in label.into_iter().enumerate() {
                mat.set_entry(i as i64, j as i64, value).unwrap();
            }
            row_to_attrib.push(attrib);
        }

        Ok(Self { mat, row_to_attrib })
    }

    /// Collects row `i` of the share-generating matrix as a vector over the
    /// scalar field of the pairing group.
    pub(crate) fn row_as_fr(&self, i: i64) -> Vec<Fr> {
        (0..self.mat.get_num_columns())
            .map(|j| {
                let entry: Z = self.mat.get_entry(i, j).unwrap();
                fr_from_z(&entry)
            })
            .collect()
    }
}

/// Splits a formula into tokens: parentheses stand alone, everything else is
/// separated by whitespace.
fn tokenize(formula: &str) -> Vec<String> {
    formula
        .replace('(', " ( ")
        .replace(')', " ) ")
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Recursive-descent parser over the token stream with `AND` binding
/// tighter than `OR`.
struct Parser<'a> {
    tokens: &'a [String],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&str> {
        self.tokens.get(self.pos).map(String::as_str)
    }

    fn parse_or(&mut self) -> Result<Node, CryptoError> {
        let mut node = self.parse_and()?;
        while self.peek() == Some("OR") {
            self.pos += 1;
            let rhs = self.parse_and()?;
            node = Node::Or(Box::new(node), Box::new(rhs));
        }
        Ok(node)
    }

    fn parse_and(&mut self) -> Result<Node, CryptoError> {
        let mut node = self.parse_factor()?;
        while self.peek() == Some("AND") {
            self.pos += 1;
            let rhs = self.parse_factor()?;
            node = Node::And(Box::new(node), Box::new(rhs));
        }
        Ok(node)
    }

    fn parse_factor(&mut self) -> Result<Node, CryptoError> {
        match self.peek() {
            Some("(") => {
                self.pos += 1;
                let node = self.parse_or()?;
                if self.peek() != Some(")") {
                    return Err(CryptoError::ParseError(String::from(
                        "Missing closing parenthesis.",
                    )));
                }
                self.pos += 1;
                Ok(node)
            }
            Some(token @ (")" | "AND" | "OR")) => Err(CryptoError::ParseError(format!(
                "Expected an attribute name, found '{token}'."
            ))),
            Some(attrib) => {
                if attrib.contains("AND") || attrib.contains("OR") {
                    return Err(CryptoError::ParseError(format!(
                        "Attribute name '{attrib}' contains a reserved word."
                    )));
                }
                let attrib = attrib.to_owned();
                self.pos += 1;
                Ok(Node::Leaf(attrib))
            }
            None => Err(CryptoError::ParseError(String::from(
                "Unexpected end of formula.",
            ))),
        }
    }
}

/// Assigns share vectors to the leaves: an `OR` node passes its vector to
/// both children, an `AND` node allocates a fresh column such that the
/// children's vectors sum to the parent's. Leaf vectors become the matrix
/// rows, padded with zeros to the final number of columns.
fn assign_labels(
    node: &Node,
    label: Vec<i64>,
    columns: &mut usize,
    rows: &mut Vec<(String, Vec<i64>)>,
) {
    match node {
        Node::Leaf(attrib) => rows.push((attrib.clone(), label)),
        Node::Or(left, right) => {
            assign_labels(left, label.clone(), columns, rows);
            assign_labels(right, label, columns, rows);
        }
        Node::And(left, right) => {
            let mut left_label = label;
            left_label.resize(*columns, 0);
            left_label.push(1);

            let mut right_label = vec![0; *columns];
            right_label.push(-1);

            *columns += 1;
            assign_labels(left, left_label, columns, rows);
            assign_labels(right, right_label, columns, rows);
        }
    }
}

/// Maps a signed integer into the scalar field of the pairing group.
pub(crate) fn fr_from_z(value: &Z) -> Fr {
    let abs = Fr::from_str(&value.abs().to_string()).unwrap();
    if value < &Z::ZERO {
        -abs
    } else {
        abs
    }
}

/// Solves the linear system `mat * x = target` over the scalar field of the
/// pairing group by Gauss-Jordan elimination; free variables are set to
/// zero.
///
/// Parameters:
/// - `mat`: specifies the coefficient matrix as a vector of equally long rows
/// - `target`: specifies the right-hand side, one entry per row of `mat`
///
/// Returns some solution vector, or [`None`] if the system is inconsistent.
pub(crate) fn gaussian_elimination(mat: &[Vec<Fr>], target: &[Fr]) -> Option<Vec<Fr>> {
    let rows = mat.len();
    if rows == 0 || rows != target.len() {
        return None;
    }
    let cols = mat[0].len();

    let mut a = mat.to_vec();
    let mut b = target.to_vec();
    let mut pivots = Vec::new();
    let mut rank = 0;

    for col in 0..cols {
        let Some(pivot_row) = (rank..rows).find(|&i| !a[i][col].is_zero()) else {
            continue;
        };
        a.swap(rank, pivot_row);
        b.swap(rank, pivot_row);

        let inv = a[rank][col].inverse().unwrap();
        for j in col..cols {
            a[rank][j] = a[rank][j] * inv;
        }
        b[rank] = b[rank] * inv;

        for i in 0..rows {
            if i != rank && !a[i][col].is_zero() {
                let factor = a[i][col];
                for j in col..cols {
                    a[i][j] = a[i][j] - factor * a[rank][j];
                }
                b[i] = b[i] - factor * b[rank];
            }
        }

        pivots.push(col);
        rank += 1;
        if rank == rows {
            break;
        }
    }

    // rows below the rank were eliminated completely; a non-zero right-hand
    // side there means the system has no solution
    if b[rank..].iter().any(|entry| !entry.is_zero()) {
        return None;
    }

    let mut solution = vec![Fr::zero(); cols];
    for (row, col) in pivots.into_iter().enumerate() {
        solution[col] = b[row];
    }
    Some(solution)
}


#[cfg(test)]
mod test_reconstruction {
    use super::{gaussian_elimination, Msp};
    use rabe_bn::Fr;

    /// Collects the transposed sub-matrix of the given rows and solves for
    /// the reconstruction coefficients of `(1, 0, ..., 0)`.
    fn spans_target(msp: &Msp, rows: &[usize]) -> bool {
        use qfall_math::traits::GetNumColumns;

        let cols = msp.mat.get_num_columns();
        let sub: Vec<Vec<Fr>> = rows.iter().map(|&i| msp.row_as_fr(i as i64)).collect();
        let transposed: Vec<Vec<Fr>> = (0..cols as usize)
            .map(|j| sub.iter().map(|row| row[j]).collect())
            .collect();
        let mut target = vec![Fr::zero(); cols as usize];
        target[0] = Fr::one();

        gaussian_elimination(&transposed, &target).is_some()
    }

    /// Ensure that exactly the satisfying subsets of the reference formula
    /// span the target vector. Rows are indexed in leaf order
    /// `1, 4, 2, 0, 5`.
    #[test]
    fn reference_formula_subsets() {
        let msp = Msp::from_boolean_formula("(1 OR 4) AND (2 OR (0 AND 5))").unwrap();

        // {1, 2} satisfies, {4, 0} does not (misses the second clause)
        assert!(spans_target(&msp, &[0, 2]));
        assert!(!spans_target(&msp, &[1, 3]));
        // {4, 2} and {1, 0, 5} satisfy
        assert!(spans_target(&msp, &[1, 2]));
        assert!(spans_target(&msp, &[0, 3, 4]));
        // single clauses do not
        assert!(!spans_target(&msp, &[0, 1]));
        assert!(!spans_target(&msp, &[2, 3, 4]));
        // the full set does
        assert!(spans_target(&msp, &[0, 1, 2, 3, 4]));
    }

    /// Ensure that ANDs require both sides: for `a AND b` neither row alone
    /// spans the target but together they do.
    #[test]
    fn conjunction_needs_both() {
        let msp = Msp::from_boolean_formula("a AND b").unwrap();

        assert!(spans_target(&msp, &[0, 1]));
        assert!(!spans_target(&msp, &[0]));
        assert!(!spans_target(&msp, &[1]));
    }

    /// Ensure that each single row of a disjunction spans the target.
    #[test]
    fn disjunction_needs_one() {
        let msp = Msp::from_boolean_formula("a OR b OR c").unwrap();

        for i in 0..3 {
            assert!(spans_target(&msp, &[i]));
        }
    }
}

#[cfg(test)]
mod test_gaussian_elimination {
    use super::{fr_from_z, gaussian_elimination};
    use qfall_math::integer::Z;
    use rabe_bn::Fr;

    fn fr(value: i64) -> Fr {
        fr_from_z(&Z::from(value))
    }

    /// Ensure that a unique system is solved exactly.
    #[test]
    fn unique_solution() {
        let mat = vec![vec![fr(2), fr(1)], vec![fr(1), fr(1)]];
        let target = vec![fr(3), fr(2)];

        let solution = gaussian_elimination(&mat, &target).unwrap();

        assert!(vec![fr(1), fr(1)] == solution);
    }

    /// Ensure that inconsistent systems report no solution.
    #[test]
    fn inconsistent_system() {
        let mat = vec![vec![fr(1), fr(1)], vec![fr(2), fr(2)]];
        let target = vec![fr(1), fr(3)];

        assert!(gaussian_elimination(&mat, &target).is_none());
    }

    /// Ensure that underdetermined systems return some valid solution with
    /// free variables fixed to zero.
    #[test]
    fn underdetermined_system() {
        let mat = vec![vec![fr(0), fr(3), fr(1)]];
        let target = vec![fr(6)];

        let solution = gaussian_elimination(&mat, &target).unwrap();

        assert!(vec![fr(0), fr(2), fr(0)] == solution);
    }

    /// Ensure that negative entries are mapped through the field correctly:
    /// `-1 * x = 1` has the solution `x = -1`.
    #[test]
    fn negative_entries() {
        let mat = vec![vec![fr(-1)]];
        let target = vec![fr(1)];

        let solution = gaussian_elimination(&mat, &target).unwrap();

        assert!(vec![fr(-1)] == solution);
        assert!(fr(0) == fr(1) + solution[0]);
    }

    /// Ensure that `Fr::from_str` based conversion round-trips signs.
    #[test]
    fn sign_conversion() {
        assert!(fr(0) == fr(5) + fr(-5));
        assert!(fr(1) == fr(-1) * fr(-1));
    }
}
