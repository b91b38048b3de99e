use super::*;
use crate::base_operations::Wire;

/// Lays out a running sum over an explicit trace of bits, most significant first, and copies
/// `value` into its final accumulator. The trace is not required to be honest.
#[derive(Clone)]
pub(crate) struct DecomposeCircuit<F: PrimeField> {
    value: Value<F>,
    bits_msb_first: Vec<Value<F>>,
}

impl<F: PrimeField> DecomposeCircuit<F> {
    pub(crate) fn new_for(value: Value<F>, bits_msb_first: Vec<Value<F>>) -> Self {
        Self {
            value,
            bits_msb_first,
        }
    }
}

impl<F: PrimeField> Circuit<F> for DecomposeCircuit<F> {
    type Config = BaseOperationsConfig;
    type FloorPlanner = SimpleFloorPlanner;
    type Params = ();

    fn without_witnesses(&self) -> Self {
        Self {
            value: Value::unknown(),
            bits_msb_first: vec![Value::unknown(); self.bits_msb_first.len()],
        }
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
            || "running sum",
            |mut region| {
                let mut offset = 0;
                let value = chip.witness(&mut region, &mut offset, self.value)?;
                let wires: Vec<Wire<'_, F>> =
                    self.bits_msb_first.iter().map(|bit| Wire::Fresh(*bit)).collect();
                config.decompose.assign_running_sum(
                    &mut region,
                    &mut offset,
                    &wires,
                    Some(&value),
                )?;
                Ok(())
            },
        )
    }
}

/// Range checks `value` to `nb_bits` bits through the chip.
#[derive(Clone)]
pub(crate) struct RangeCheckCircuit<F: PrimeField> {
    value: Value<F>,
    nb_bits: usize,
}

impl<F: PrimeField> RangeCheckCircuit<F> {
    pub(crate) fn new_for(value: Value<F>, nb_bits: usize) -> Self {
        Self { value, nb_bits }
    }
}

impl<F: PrimeField> Circuit<F> for RangeCheckCircuit<F> {
    type Config = BaseOperationsConfig;
    type FloorPlanner = SimpleFloorPlanner;
    type Params = ();

    fn without_witnesses(&self) -> Self {
        Self {
            value: Value::unknown(),
            nb_bits: self.nb_bits,
        }
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
            || "range check",
            |mut region| {
                let mut offset = 0;
                let value = chip.witness(&mut region, &mut offset, self.value)?;
                chip.range_check(&mut region, &mut offset, &value, self.nb_bits)
            },
        )
    }
}
