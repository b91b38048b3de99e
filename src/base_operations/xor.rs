use super::*;

/// Config used to constrain bitwise xor operations.
///
/// Each row holds one bit of each operand and the result, and the gate
/// `lhs + rhs - 2·lhs·rhs - out = 0` forces `out = lhs ^ rhs` whenever both operands are
/// boolean. A 64-bit word xor is therefore 64 rows of this gate.
#[derive(Clone, Debug)]
pub struct XorConfig {
    q_xor: Selector,
    lhs: Column<Advice>,
    rhs: Column<Advice>,
    out: Column<Advice>,
}

impl XorConfig {
    /// Creates the xor gate.
    pub fn configure<F: PrimeField>(
        meta: &mut ConstraintSystem<F>,
        lhs: Column<Advice>,
        rhs: Column<Advice>,
        out: Column<Advice>,
    ) -> Self {
        let q_xor = meta.selector();

        meta.create_gate("xor", |meta| {
            let lhs = meta.query_advice(lhs, Rotation::cur());
            let rhs = meta.query_advice(rhs, Rotation::cur());
            let out = meta.query_advice(out, Rotation::cur());
            Constraints::with_selector(
                q_xor,
                vec![
                    lhs.clone() + rhs.clone()
                        - Expression::Constant(F::from(2)) * lhs * rhs
                        - out,
                ],
            )
        });

        Self {
            q_xor,
            lhs,
            rhs,
            out,
        }
    }

    /// Computes the xor of two bits in a single row. The operands are copied and the result is
    /// a new cell.
    pub(crate) fn xor_bit<F: PrimeField>(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        lhs: &AssignedBit<F>,
        rhs: &AssignedBit<F>,
    ) -> Result<AssignedBit<F>, Error> {
        let result = lhs.value().zip(rhs.value()).map(|(lhs, rhs)| Bit(lhs.0 ^ rhs.0).to_field());
        self.assign_xor_row(region, offset, lhs, rhs, result)
    }

    /// Fills a xor row with the given result value. Kept separate from [Self::xor_bit] so
    /// the trace-level tests can place a wrong result in the trace.
    pub(crate) fn assign_xor_row<F: PrimeField>(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        lhs: &AssignedBit<F>,
        rhs: &AssignedBit<F>,
        result: Value<F>,
    ) -> Result<AssignedBit<F>, Error> {
        self.q_xor.enable(region, *offset)?;
        lhs.as_native().copy_advice(|| "xor lhs", region, self.lhs, *offset)?;
        rhs.as_native().copy_advice(|| "xor rhs", region, self.rhs, *offset)?;
        let out = region.assign_advice(|| "xor out", self.out, *offset, || result)?;
        *offset += 1;
        Ok(AssignedBit::new_unchecked(out))
    }
}
