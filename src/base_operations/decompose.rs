use super::*;

/// Running-sum decomposition of a field element into bits.
///
/// The bits are laid out most significant first, one per row, next to an accumulator that
/// starts at zero and doubles on every row:
///
/// | accumulator | bit       |
/// |-------------|-----------|
/// | 0           | b_{n-1}   |
/// | acc_1       | b_{n-2}   |
/// | ...         | ...       |
/// | acc_{n-1}   | b_0       |
/// | acc_n       |           |
///
/// with `acc_{i+1} = 2·acc_i + bit_i` and every bit constrained to be boolean. The last
/// accumulator is the recomposed number, so copying a cell there proves that it fits in `n`
/// bits.
#[derive(Clone, Debug)]
pub struct DecomposeConfig {
    q_decompose: Selector,
    q_start: Selector,
    q_bool: Selector,
    accumulator: Column<Advice>,
    bit: Column<Advice>,
}

impl DecomposeConfig {
    /// Creates the running sum, start and boolean gates.
    pub fn configure<F: PrimeField>(
        meta: &mut ConstraintSystem<F>,
        accumulator: Column<Advice>,
        bit: Column<Advice>,
    ) -> Self {
        let q_decompose = meta.selector();
        let q_start = meta.selector();
        let q_bool = meta.selector();

        meta.create_gate("running sum", |meta| {
            let acc_cur = meta.query_advice(accumulator, Rotation::cur());
            let bit_cur = meta.query_advice(bit, Rotation::cur());
            let acc_next = meta.query_advice(accumulator, Rotation::next());
            Constraints::with_selector(
                q_decompose,
                vec![Expression::Constant(F::from(2)) * acc_cur + bit_cur - acc_next],
            )
        });

        meta.create_gate("running sum start", |meta| {
            let acc_cur = meta.query_advice(accumulator, Rotation::cur());
            Constraints::with_selector(q_start, vec![acc_cur])
        });

        meta.create_gate("boolean", |meta| {
            let bit = meta.query_advice(bit, Rotation::cur());
            Constraints::with_selector(
                q_bool,
                vec![bit.clone() * (bit - Expression::Constant(F::ONE))],
            )
        });

        Self {
            q_decompose,
            q_start,
            q_bool,
            accumulator,
            bit,
        }
    }

    /// Lays out a running sum over the given bits, most significant first, and returns the bits
    /// in little endian order together with the final accumulator. When `result` is given, it is
    /// copied into the final accumulator instead of a fresh cell.
    /// This is the only place where bits get their boolean constraint, so the trace-level tests
    /// call it directly with forged values.
    pub(crate) fn assign_running_sum<F: PrimeField>(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        bits_msb_first: &[Wire<'_, F>],
        result: Option<&AssignedNative<F>>,
    ) -> Result<(Vec<AssignedBit<F>>, AssignedNative<F>), Error> {
        let nb_bits = bits_msb_first.len();
        assert!(nb_bits > 0, "Cannot decompose into zero bits");
        assert!(
            nb_bits < F::NUM_BITS as usize,
            "Decomposition would overflow the field"
        );

        let mut acc_value = Value::known(F::ZERO);
        let mut assigned_bits = Vec::with_capacity(nb_bits);

        for (i, wire) in bits_msb_first.iter().enumerate() {
            let row = *offset + i;
            self.q_decompose.enable(region, row)?;
            self.q_bool.enable(region, row)?;
            if i == 0 {
                self.q_start.enable(region, row)?;
            }

            region.assign_advice(|| "accumulator", self.accumulator, row, || acc_value)?;
            let bit_cell = match wire {
                Wire::Copy(cell) => cell.copy_advice(|| "bit", region, self.bit, row)?,
                Wire::Fresh(value) => region.assign_advice(|| "bit", self.bit, row, || *value)?,
            };

            acc_value = acc_value.zip(bit_cell.value()).map(|(acc, bit)| acc.double() + bit);
            assigned_bits.push(AssignedBit::new_unchecked(bit_cell));
        }

        let last_row = *offset + nb_bits;
        let recomposed = match result {
            Some(cell) => cell.copy_advice(|| "recomposed", region, self.accumulator, last_row)?,
            None => region.assign_advice(|| "recomposed", self.accumulator, last_row, || {
                acc_value
            })?,
        };

        *offset += nb_bits + 1;
        assigned_bits.reverse();
        Ok((assigned_bits, recomposed))
    }

    /// Decomposes `x` into `nb_bits` little endian bits. The circuit is unsatisfiable if
    /// `x >= 2^nb_bits`.
    pub(crate) fn to_bits<F: PrimeField>(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        x: &AssignedNative<F>,
        nb_bits: usize,
    ) -> Result<Vec<AssignedBit<F>>, Error> {
        let bit_values = x.value().map(|v| le_bits_from_field(v, nb_bits));
        let wires: Vec<Wire<'_, F>> = (0..nb_bits)
            .rev()
            .map(|i| Wire::Fresh(bit_values.as_ref().map(|bits| Bit(bits[i]).to_field())))
            .collect();

        let (bits, _) = self.assign_running_sum(region, offset, &wires, Some(x))?;
        Ok(bits)
    }

    /// Recomposes little endian bits into a fresh cell.
    pub(crate) fn from_bits<F: PrimeField>(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        bits: &[AssignedBit<F>],
    ) -> Result<AssignedNative<F>, Error> {
        let wires: Vec<Wire<'_, F>> =
            bits.iter().rev().map(|bit| Wire::Copy(bit.as_native())).collect();
        let (_, recomposed) = self.assign_running_sum(region, offset, &wires, None)?;
        Ok(recomposed)
    }
}
