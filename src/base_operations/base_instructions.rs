use crate::types::bit::AssignedBit;
use crate::types::blake2b_word::AssignedBlake2bWord;
use crate::types::byte::AssignedByte;
use crate::types::{to_array, AssignedNative};
use ff::PrimeField;
use midnight_proofs::circuit::{Region, Value};
use midnight_proofs::plonk::Error;
use std::fmt::Debug;

/// Field-level operations the blake2b chip relies on. Every operation lays its rows inside the
/// given region starting at `offset`, and moves `offset` past the rows it used.
///
/// Operations returning an [AssignedBit], [AssignedByte] or [AssignedBlake2bWord] guarantee the
/// range of the result with constraints. Operations returning an [AssignedNative] don't.
pub trait BaseInstructions<F: PrimeField>: Clone + Debug {
    /// Assigns a cell that is fixed to `constant` for every witness.
    fn assign_constant(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        constant: F,
    ) -> Result<AssignedNative<F>, Error>;

    /// Assigns an unconstrained value. This is how hints enter the circuit, the caller is
    /// responsible for constraining them afterwards.
    fn witness(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        value: Value<F>,
    ) -> Result<AssignedNative<F>, Error>;

    /// Returns `constant + Σ coefficient_i·term_i` for up to three terms.
    fn linear_combination(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        terms: &[(F, &AssignedNative<F>)],
        constant: F,
    ) -> Result<AssignedNative<F>, Error>;

    /// Returns `x·y`.
    fn mul(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        x: &AssignedNative<F>,
        y: &AssignedNative<F>,
    ) -> Result<AssignedNative<F>, Error>;

    /// Returns a boolean cell that is one iff `x` is zero.
    fn is_zero(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        x: &AssignedNative<F>,
    ) -> Result<AssignedBit<F>, Error>;

    /// Returns `x` if `flag` is set and `y` otherwise.
    fn select(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        flag: &AssignedBit<F>,
        x: &AssignedNative<F>,
        y: &AssignedNative<F>,
    ) -> Result<AssignedNative<F>, Error>;

    /// Decomposes `x` into `nb_bits` little endian bits. The circuit is unsatisfiable unless
    /// `x < 2^nb_bits`.
    fn to_bits(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        x: &AssignedNative<F>,
        nb_bits: usize,
    ) -> Result<Vec<AssignedBit<F>>, Error>;

    /// Recomposes little endian bits into a number.
    fn from_bits(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        bits: &[AssignedBit<F>],
    ) -> Result<AssignedNative<F>, Error>;

    /// Xor of two bits.
    fn xor_bit(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        lhs: &AssignedBit<F>,
        rhs: &AssignedBit<F>,
    ) -> Result<AssignedBit<F>, Error>;

    /// Negation of a bit.
    fn flip_bit(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        bit: &AssignedBit<F>,
    ) -> Result<AssignedBit<F>, Error>;

    /// Returns `x + y`.
    fn add(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        x: &AssignedNative<F>,
        y: &AssignedNative<F>,
    ) -> Result<AssignedNative<F>, Error> {
        self.linear_combination(region, offset, &[(F::ONE, x), (F::ONE, y)], F::ZERO)
    }

    /// Returns `x - y`.
    fn sub(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        x: &AssignedNative<F>,
        y: &AssignedNative<F>,
    ) -> Result<AssignedNative<F>, Error> {
        self.linear_combination(region, offset, &[(F::ONE, x), (-F::ONE, y)], F::ZERO)
    }

    /// Returns `x + constant`.
    fn add_constant(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        x: &AssignedNative<F>,
        constant: F,
    ) -> Result<AssignedNative<F>, Error> {
        self.linear_combination(region, offset, &[(F::ONE, x)], constant)
    }

    /// Constrains two cells to hold the same value.
    fn assert_equal(
        &self,
        region: &mut Region<'_, F>,
        x: &AssignedNative<F>,
        y: &AssignedNative<F>,
    ) -> Result<(), Error> {
        region.constrain_equal(x.cell(), y.cell())
    }

    /// Constrains `x < 2^nb_bits`.
    fn range_check(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        x: &AssignedNative<F>,
        nb_bits: usize,
    ) -> Result<(), Error> {
        self.to_bits(region, offset, x, nb_bits).map(|_| ())
    }

    /// Selection between two bits. The result is a bit because both candidates are.
    fn select_bit(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        flag: &AssignedBit<F>,
        x: &AssignedBit<F>,
        y: &AssignedBit<F>,
    ) -> Result<AssignedBit<F>, Error> {
        let selected = self.select(region, offset, flag, x.as_native(), y.as_native())?;
        Ok(AssignedBit::new_unchecked(selected))
    }

    /// Bitwise xor of two bit sequences of the same length.
    fn xor_bits(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        lhs: &[AssignedBit<F>],
        rhs: &[AssignedBit<F>],
    ) -> Result<Vec<AssignedBit<F>>, Error> {
        assert_eq!(lhs.len(), rhs.len(), "Xor operands must have the same length");
        lhs.iter().zip(rhs).map(|(l, r)| self.xor_bit(region, offset, l, r)).collect()
    }

    /// Bitwise xor of two words. The result carries its bits, so it can be rotated or xored
    /// again without a new decomposition.
    fn xor_words(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        lhs: &AssignedBlake2bWord<F>,
        rhs: &AssignedBlake2bWord<F>,
    ) -> Result<AssignedBlake2bWord<F>, Error> {
        let bits = self.xor_bits(region, offset, lhs.bits(), rhs.bits())?;
        self.word_from_bits(region, offset, &bits)
    }

    /// Builds a word out of 64 little endian bits.
    fn word_from_bits(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        bits: &[AssignedBit<F>],
    ) -> Result<AssignedBlake2bWord<F>, Error> {
        let full_number = self.from_bits(region, offset, bits)?;
        Ok(AssignedBlake2bWord::new_unchecked(full_number, to_array(bits)))
    }

    /// Range checks a cell to 64 bits and returns it as a word.
    fn word_from_native(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        x: &AssignedNative<F>,
    ) -> Result<AssignedBlake2bWord<F>, Error> {
        let bits = self.to_bits(region, offset, x, 64)?;
        Ok(AssignedBlake2bWord::new_unchecked(x.clone(), to_array(&bits)))
    }

    /// Assigns a constant word together with its decomposition.
    fn constant_word(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        constant: u64,
    ) -> Result<AssignedBlake2bWord<F>, Error> {
        let cell = self.assign_constant(region, offset, F::from(constant))?;
        self.word_from_native(region, offset, &cell)
    }

    /// Range checks a cell to 8 bits and returns it as a byte.
    fn byte_from_native(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        x: &AssignedNative<F>,
    ) -> Result<AssignedByte<F>, Error> {
        let bits = self.to_bits(region, offset, x, 8)?;
        Ok(AssignedByte::new_unchecked(x.clone(), to_array(&bits)))
    }

    /// Builds a byte out of 8 little endian bits.
    fn byte_from_bits(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        bits: &[AssignedBit<F>],
    ) -> Result<AssignedByte<F>, Error> {
        let full_number = self.from_bits(region, offset, bits)?;
        Ok(AssignedByte::new_unchecked(full_number, to_array(bits)))
    }
}
