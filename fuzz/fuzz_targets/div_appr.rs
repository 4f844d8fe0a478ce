#![no_main]
use arbitrary::Arbitrary;
use divappr::{DigitCounter, Limb, Reciprocal, Word, div_appr, div_appr_q_observed};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
pub struct Input {
    dividend: Vec<Word>,
    divisor: Vec<Word>,
}

fuzz_target!(|input: Input| {
    let dividend: Vec<Limb> = input.dividend.into_iter().map(Limb).collect();
    let mut divisor: Vec<Limb> = input.divisor.into_iter().map(Limb).collect();

    if divisor.iter().rposition(|limb| limb.0 != 0).is_some_and(|top| top >= 2) {
        let _ = div_appr(&dividend, &divisor);
    }

    // Normalized path: force the top bit and compare against the quotient bound
    if divisor.len() < 3 || dividend.len() < divisor.len() {
        return;
    }
    let dn = divisor.len();
    divisor[dn - 1] = Limb(divisor[dn - 1].0 | (1 << (Word::BITS - 1)));
    let reciprocal = Reciprocal::from_divisor(&divisor).unwrap();

    let mut workspace = dividend.clone();
    let mut quotient = vec![Limb::ZERO; dividend.len() - dn];
    let mut counter = DigitCounter::default();
    let qh = div_appr_q_observed(&mut quotient, &mut workspace, &divisor, &reciprocal, &mut counter);

    assert!(qh == Limb::ZERO || qh == Limb::ONE);
    assert_eq!(counter.digits(), quotient.len());
    assert!(counter.add_backs <= counter.digits());
});
