use super::*;

/// Coefficients of one arithmetic row, in the order of the fixed columns
/// `[q_a, q_b, q_c, q_d, q_mul, q_const]`.
type Coefficients<F> = [F; 6];

/// Generic arithmetic gate. Every row where `q_arith` is enabled satisfies
/// `q_a·a + q_b·b + q_c·c + q_d·d + q_mul·a·b + q_const = 0`, where the coefficients live in
/// fixed columns. Additions, linear combinations, products and selections are all rows of this
/// gate with different coefficients.
#[derive(Clone, Debug)]
pub struct ArithmeticConfig {
    q_arith: Selector,
    advice: [Column<Advice>; 4],
    coefficients: [Column<Fixed>; 6],
}

impl ArithmeticConfig {
    /// Creates the arithmetic gate over the given columns.
    pub fn configure<F: PrimeField>(
        meta: &mut ConstraintSystem<F>,
        advice: [Column<Advice>; 4],
        coefficients: [Column<Fixed>; 6],
    ) -> Self {
        let q_arith = meta.selector();

        meta.create_gate("arithmetic", |meta| {
            let w: Vec<Expression<F>> =
                advice.iter().map(|col| meta.query_advice(*col, Rotation::cur())).collect();
            let q: Vec<Expression<F>> =
                coefficients.iter().map(|col| meta.query_fixed(*col, Rotation::cur())).collect();

            let identity = q[0].clone() * w[0].clone()
                + q[1].clone() * w[1].clone()
                + q[2].clone() * w[2].clone()
                + q[3].clone() * w[3].clone()
                + q[4].clone() * w[0].clone() * w[1].clone()
                + q[5].clone();

            Constraints::with_selector(q_arith, vec![identity])
        });

        Self {
            q_arith,
            advice,
            coefficients,
        }
    }

    /// Fills a full arithmetic row and enables the gate on it. All four advice cells and all the
    /// coefficients are assigned, unused wires hold zero.
    pub(crate) fn assign_row<F: PrimeField>(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        wires: [Wire<'_, F>; 4],
        coefficients: Coefficients<F>,
    ) -> Result<[AssignedNative<F>; 4], Error> {
        self.q_arith.enable(region, *offset)?;

        let mut cells = Vec::with_capacity(4);
        for (wire, column) in wires.iter().zip(self.advice) {
            let cell = match wire {
                Wire::Copy(cell) => cell.copy_advice(|| "arith copy", region, column, *offset)?,
                Wire::Fresh(value) => {
                    region.assign_advice(|| "arith wire", column, *offset, || *value)?
                }
            };
            cells.push(cell);
        }
        for (coefficient, column) in coefficients.iter().zip(self.coefficients) {
            region.assign_fixed(|| "coefficient", column, *offset, || Value::known(*coefficient))?;
        }

        *offset += 1;
        Ok(to_array(&cells))
    }

    /// Returns `constant + Σ coefficient_i·term_i` for up to three terms, in a single row.
    pub(crate) fn linear_combination<F: PrimeField>(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        terms: &[(F, &AssignedNative<F>)],
        constant: F,
    ) -> Result<AssignedNative<F>, Error> {
        assert!(terms.len() <= 3, "A linear combination row holds at most 3 terms");

        let result = terms.iter().fold(Value::known(constant), |acc, (coefficient, cell)| {
            acc.zip(cell.value()).map(|(acc, v)| acc + *coefficient * v)
        });

        let mut wires = [Wire::zero(), Wire::zero(), Wire::zero(), Wire::Fresh(result)];
        let mut coefficients = [F::ZERO, F::ZERO, F::ZERO, -F::ONE, F::ZERO, constant];
        for (i, (coefficient, cell)) in terms.iter().enumerate() {
            wires[i] = Wire::Copy(cell);
            coefficients[i] = *coefficient;
        }

        let [_, _, _, out] = self.assign_row(region, offset, wires, coefficients)?;
        Ok(out)
    }

    /// Returns `x·y` in a single row.
    pub(crate) fn mul<F: PrimeField>(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        x: &AssignedNative<F>,
        y: &AssignedNative<F>,
    ) -> Result<AssignedNative<F>, Error> {
        let product = x.value().zip(y.value()).map(|(x, y)| *x * y);
        let [_, _, _, out] = self.assign_row(
            region,
            offset,
            [Wire::Copy(x), Wire::Copy(y), Wire::zero(), Wire::Fresh(product)],
            [F::ZERO, F::ZERO, F::ZERO, -F::ONE, F::ONE, F::ZERO],
        )?;
        Ok(out)
    }

    /// Returns `flag·(x − y) + y`, that is `x` when the flag is one and `y` when it is zero.
    /// The flag is not checked to be boolean here.
    pub(crate) fn select<F: PrimeField>(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        flag: &AssignedNative<F>,
        x: &AssignedNative<F>,
        y: &AssignedNative<F>,
    ) -> Result<AssignedNative<F>, Error> {
        let diff = self.linear_combination(region, offset, &[(F::ONE, x), (-F::ONE, y)], F::ZERO)?;

        let selected = flag.value().zip(x.value()).zip(y.value()).map(
            |((flag, x), y)| {
                if *flag == F::ONE {
                    *x
                } else {
                    *y
                }
            },
        );
        let [_, _, _, out] = self.assign_row(
            region,
            offset,
            [Wire::Copy(flag), Wire::Copy(&diff), Wire::Copy(y), Wire::Fresh(selected)],
            [F::ZERO, F::ZERO, F::ONE, -F::ONE, F::ONE, F::ZERO],
        )?;
        Ok(out)
    }

    /// Returns a cell holding one if `x` is zero and zero otherwise. Takes two rows:
    /// `x·inv + out − 1 = 0` and `x·out = 0`.
    pub(crate) fn is_zero<F: PrimeField>(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        x: &AssignedNative<F>,
    ) -> Result<AssignedNative<F>, Error> {
        let inverse = x.value().map(|x| x.invert().unwrap_or(F::ZERO));
        let out_value = x.value().map(|x| if x.is_zero_vartime() { F::ONE } else { F::ZERO });

        let [_, _, out, _] = self.assign_row(
            region,
            offset,
            [Wire::Copy(x), Wire::Fresh(inverse), Wire::Fresh(out_value), Wire::zero()],
            [F::ZERO, F::ZERO, F::ONE, F::ZERO, F::ONE, -F::ONE],
        )?;
        self.assign_row(
            region,
            offset,
            [Wire::Copy(x), Wire::Copy(&out), Wire::zero(), Wire::zero()],
            [F::ZERO, F::ZERO, F::ZERO, F::ZERO, F::ONE, F::ZERO],
        )?;
        Ok(out)
    }

    /// Assigns a value without constraining it. The row is not gated.
    pub(crate) fn witness<F: PrimeField>(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        value: Value<F>,
    ) -> Result<AssignedNative<F>, Error> {
        let cell = region.assign_advice(|| "witness", self.advice[0], *offset, || value)?;
        *offset += 1;
        Ok(cell)
    }

    /// Assigns a cell fixed to `constant` through the constants column.
    pub(crate) fn assign_constant<F: PrimeField>(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        constant: F,
    ) -> Result<AssignedNative<F>, Error> {
        let cell =
            region.assign_advice_from_constant(|| "constant", self.advice[0], *offset, constant)?;
        *offset += 1;
        Ok(cell)
    }
}
