//! C/A code generator: the 1023-chip Gold code broadcast at 1.023 Mcps,
//! produced by combining two 10-stage LFSRs (G1, G2) per IS-GPS-200.

use crate::gps::constants::CA_CODE_LENGTH;

/// G2 output-tap pair per PRN (1-indexed shift-register stage numbers),
/// IS-GPS-200 / Kaplan & Hegarty Table "C/A-Code Phase Assignments".
/// PRNs 1..32; index 0 is PRN 1.
const G2_TAPS: [(u8, u8); 32] = [
    (2, 6),
    (3, 7),
    (4, 8),
    (5, 9),
    (1, 9),
    (2, 10),
    (1, 8),
    (2, 9),
    (3, 10),
    (2, 3),
    (3, 4),
    (5, 6),
    (6, 7),
    (7, 8),
    (8, 9),
    (9, 10),
    (1, 4),
    (2, 5),
    (3, 6),
    (4, 7),
    (5, 8),
    (6, 9),
    (1, 3),
    (4, 6),
    (5, 7),
    (6, 8),
    (7, 9),
    (8, 10),
    (1, 6),
    (2, 7),
    (3, 8),
    (4, 9),
];

/// G1 feedback taps (0-indexed stages), polynomial x^10 + x^3 + 1.
const G1_FEEDBACK: [usize; 2] = [2, 9];

/// G2 feedback taps (0-indexed stages), polynomial
/// x^10 + x^9 + x^8 + x^6 + x^3 + x^2 + 1.
const G2_FEEDBACK: [usize; 6] = [1, 2, 5, 7, 8, 9];

/// Generates the 1023-chip C/A code for `prn` (1..=32). Panics in debug
/// builds on an out-of-range PRN (a programmer error, per the precondition
/// taxonomy).
///
/// Runs G1 and G2 as two 10-stage shift registers, both preset to all
/// ones; at every chip, G1 contributes its stage-10 output and G2
/// contributes the XOR of its PRN-selected tap pair, and the chip is
/// their XOR, taken before the registers shift. This is already
/// phase-aligned to IS-GPS-200's published "chip 0".
pub fn generate(prn: u8) -> [bool; CA_CODE_LENGTH] {
    debug_assert!((1..=32).contains(&prn), "invalid PRN: {prn}");

    let (t1, t2) = G2_TAPS[(prn.clamp(1, 32) - 1) as usize];
    let (t1, t2) = ((t1 - 1) as usize, (t2 - 1) as usize);

    let mut g1 = [true; 10];
    let mut g2 = [true; 10];
    let mut raw = [false; CA_CODE_LENGTH];

    for chip in raw.iter_mut() {
        let g1_out = g1[9];
        let g2_out = g2[t1] ^ g2[t2];
        *chip = g1_out ^ g2_out;

        let g1_feedback = G1_FEEDBACK.iter().fold(false, |acc, &t| acc ^ g1[t]);
        let g2_feedback = G2_FEEDBACK.iter().fold(false, |acc, &t| acc ^ g2[t]);

        for i in (1..10).rev() {
            g1[i] = g1[i - 1];
            g2[i] = g2[i - 1];
        }
        g1[0] = g1_feedback;
        g2[0] = g2_feedback;
    }

    raw
}
