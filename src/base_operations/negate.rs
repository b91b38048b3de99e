use super::*;

/// This config handles the bit inversion used to complement the finalization word of the last
/// compression. A bit and its negation always add up to one, so the gate is simply
/// `input + output - 1 = 0`.
#[derive(Clone, Debug)]
pub struct NegateConfig {
    q_negate: Selector,
    input: Column<Advice>,
    output: Column<Advice>,
}

impl NegateConfig {
    /// Creates the negate gate.
    pub fn configure<F: PrimeField>(
        meta: &mut ConstraintSystem<F>,
        input: Column<Advice>,
        output: Column<Advice>,
    ) -> Self {
        let q_negate = meta.selector();

        meta.create_gate("negate", |meta| {
            let input = meta.query_advice(input, Rotation::cur());
            let output = meta.query_advice(output, Rotation::cur());
            Constraints::with_selector(
                q_negate,
                vec![input + output - Expression::Constant(F::ONE)],
            )
        });

        Self {
            q_negate,
            input,
            output,
        }
    }

    /// Returns the negation of a bit. One row.
    pub(crate) fn flip_bit<F: PrimeField>(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        bit: &AssignedBit<F>,
    ) -> Result<AssignedBit<F>, Error> {
        let negated_value: Value<F> = bit.value().map(|b| Bit(!b.0).to_field());
        self.assign_negate_row(region, offset, bit, negated_value)
    }

    /// Fills a negate row with the given output value.
    pub(crate) fn assign_negate_row<F: PrimeField>(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        bit: &AssignedBit<F>,
        negated_value: Value<F>,
    ) -> Result<AssignedBit<F>, Error> {
        self.q_negate.enable(region, *offset)?;
        bit.as_native().copy_advice(|| "bit to negate", region, self.input, *offset)?;
        let negated =
            region.assign_advice(|| "negated bit", self.output, *offset, || negated_value)?;
        *offset += 1;
        Ok(AssignedBit::new_unchecked(negated))
    }
}
