use super::*;

/// Xors two words through the chip and constrains the result to `expected_result`.
#[derive(Clone)]
pub(crate) struct XorCircuit<F: PrimeField> {
    lhs: Value<F>,
    rhs: Value<F>,
    expected_result: Value<F>,
}

impl<F: PrimeField> XorCircuit<F> {
    pub(crate) fn new_for(lhs: Value<F>, rhs: Value<F>, expected_result: Value<F>) -> Self {
        Self {
            lhs,
            rhs,
            expected_result,
        }
    }
}

impl<F: PrimeField> Circuit<F> for XorCircuit<F> {
    type Config = BaseOperationsConfig;
    type FloorPlanner = SimpleFloorPlanner;
    type Params = ();

    fn without_witnesses(&self) -> Self {
        Self::new_for(Value::unknown(), Value::unknown(), Value::unknown())
    }

    fn configure(meta: &mut ConstraintSystem<F>) -> Self::Config {
        configure_base_chip(meta)
    }

    fn synthesize(
        &self,
        config: Self::Config,
        mut layouter: impl Layouter<F>,
    ) -> Result<(), Error> {
        let chip = BaseOperationsChip::new(&config);
        layouter.assign_region(
            || "xor",
            |mut region| {
                let mut offset = 0;
                let region = &mut region;
                let offset = &mut offset;

                let lhs = chip.witness(region, offset, self.lhs)?;
                let lhs = chip.word_from_native(region, offset, &lhs)?;
                let rhs = chip.witness(region, offset, self.rhs)?;
                let rhs = chip.word_from_native(region, offset, &rhs)?;
                let result = chip.xor_words(region, offset, &lhs, &rhs)?;

                let expected_result = chip.witness(region, offset, self.expected_result)?;
                chip.assert_equal(region, result.as_native(), &expected_result)
            },
        )
    }
}

/// Fills a single xor row with operand bits taken from range checked cells and an arbitrary
/// result.
#[derive(Clone)]
pub(crate) struct XorRowCircuit<F: PrimeField> {
    lhs: Value<F>,
    rhs: Value<F>,
    result: Value<F>,
}

impl<F: PrimeField> XorRowCircuit<F> {
    pub(crate) fn new_for(lhs: Value<F>, rhs: Value<F>, result: Value<F>) -> Self {
        Self { lhs, rhs, result }
    }
}

impl<F: PrimeField> Circuit<F> for XorRowCircuit<F> {
    type Config = BaseOperationsConfig;
    type FloorPlanner = SimpleFloorPlanner;
    type Params = ();

    fn without_witnesses(&self) -> Self {
        Self::new_for(Value::unknown(), Value::unknown(), Value::unknown())
    }

    fn configure(meta: &mut ConstraintSystem<F>) -> Self::Config {
        configure_base_chip(meta)
    }

    fn synthesize(
        &self,
        config: Self::Config,
        mut layouter: impl Layouter<F>,
    ) -> Result<(), Error> {
        let chip = BaseOperationsChip::new(&config);
        layouter.assign_region(
            || "xor row",
            |mut region| {
                let mut offset = 0;
                let region = &mut region;
                let offset = &mut offset;

                let lhs = chip.witness(region, offset, self.lhs)?;
                let lhs = chip.to_bits(region, offset, &lhs, 1)?;
                let rhs = chip.witness(region, offset, self.rhs)?;
                let rhs = chip.to_bits(region, offset, &rhs, 1)?;
                config.xor.assign_xor_row(region, offset, &lhs[0], &rhs[0], self.result)?;
                Ok(())
            },
        )
    }
}
