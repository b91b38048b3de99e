use super::arithmetic::ArithmeticConfig;
use super::base_instructions::BaseInstructions;
use super::decompose::DecomposeConfig;
use super::negate::NegateConfig;
use super::xor::XorConfig;
use crate::types::bit::AssignedBit;
use crate::types::AssignedNative;
use ff::{Field, PrimeField};
use midnight_proofs::circuit::{Chip, Region, Value};
use midnight_proofs::plonk::{Advice, Column, ConstraintSystem, Error, Fixed};
use std::marker::PhantomData;

/// Columns and gates of the base operations.
#[derive(Clone, Debug)]
pub struct BaseOperationsConfig {
    /// Advice columns shared by every gate.
    pub advice: [Column<Advice>; 4],
    pub(crate) arithmetic: ArithmeticConfig,
    pub(crate) decompose: DecomposeConfig,
    pub(crate) xor: XorConfig,
    pub(crate) negate: NegateConfig,
}

/// Chip implementing [BaseInstructions] with the gates of this module.
#[derive(Clone, Debug)]
pub struct BaseOperationsChip<F> {
    config: BaseOperationsConfig,
    _marker: PhantomData<F>,
}

impl<F: Field> Chip<F> for BaseOperationsChip<F> {
    type Config = BaseOperationsConfig;
    type Loaded = ();

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn loaded(&self) -> &Self::Loaded {
        &()
    }
}

impl<F: PrimeField> BaseOperationsChip<F> {
    /// Creates the chip from its configuration.
    pub fn new(config: &BaseOperationsConfig) -> Self {
        Self {
            config: config.clone(),
            _marker: PhantomData,
        }
    }

    /// Creates every gate over the given columns.
    ///
    /// Note: this function enables equality on the advice columns and registers the constants
    /// column, it should not be done manually before calling it.
    pub fn configure(
        meta: &mut ConstraintSystem<F>,
        advice: [Column<Advice>; 4],
        coefficients: [Column<Fixed>; 6],
        constants: Column<Fixed>,
    ) -> BaseOperationsConfig {
        meta.enable_constant(constants);
        for column in advice {
            meta.enable_equality(column);
        }

        let arithmetic = ArithmeticConfig::configure(meta, advice, coefficients);
        let decompose = DecomposeConfig::configure(meta, advice[0], advice[1]);
        let xor = XorConfig::configure(meta, advice[0], advice[1], advice[2]);
        let negate = NegateConfig::configure(meta, advice[0], advice[1]);

        BaseOperationsConfig {
            advice,
            arithmetic,
            decompose,
            xor,
            negate,
        }
    }
}

impl<F: PrimeField> BaseInstructions<F> for BaseOperationsChip<F> {
    fn assign_constant(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        constant: F,
    ) -> Result<AssignedNative<F>, Error> {
        self.config.arithmetic.assign_constant(region, offset, constant)
    }

    fn witness(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        value: Value<F>,
    ) -> Result<AssignedNative<F>, Error> {
        self.config.arithmetic.witness(region, offset, value)
    }

    fn linear_combination(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        terms: &[(F, &AssignedNative<F>)],
        constant: F,
    ) -> Result<AssignedNative<F>, Error> {
        self.config.arithmetic.linear_combination(region, offset, terms, constant)
    }

    fn mul(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        x: &AssignedNative<F>,
        y: &AssignedNative<F>,
    ) -> Result<AssignedNative<F>, Error> {
        self.config.arithmetic.mul(region, offset, x, y)
    }

    fn is_zero(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        x: &AssignedNative<F>,
    ) -> Result<AssignedBit<F>, Error> {
        let out = self.config.arithmetic.is_zero(region, offset, x)?;
        Ok(AssignedBit::new_unchecked(out))
    }

    fn select(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        flag: &AssignedBit<F>,
        x: &AssignedNative<F>,
        y: &AssignedNative<F>,
    ) -> Result<AssignedNative<F>, Error> {
        self.config.arithmetic.select(region, offset, flag.as_native(), x, y)
    }

    fn to_bits(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        x: &AssignedNative<F>,
        nb_bits: usize,
    ) -> Result<Vec<AssignedBit<F>>, Error> {
        self.config.decompose.to_bits(region, offset, x, nb_bits)
    }

    fn from_bits(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        bits: &[AssignedBit<F>],
    ) -> Result<AssignedNative<F>, Error> {
        self.config.decompose.from_bits(region, offset, bits)
    }

    fn xor_bit(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        lhs: &AssignedBit<F>,
        rhs: &AssignedBit<F>,
    ) -> Result<AssignedBit<F>, Error> {
        self.config.xor.xor_bit(region, offset, lhs, rhs)
    }

    fn flip_bit(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        bit: &AssignedBit<F>,
    ) -> Result<AssignedBit<F>, Error> {
        self.config.negate.flip_bit(region, offset, bit)
    }
}
