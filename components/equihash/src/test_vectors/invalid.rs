use crate::{params::Params, verify::Kind};

pub(crate) struct TestVector {
    pub(crate) params: Params,
    pub(crate) input: &'static [u8],
    pub(crate) nonce: u32,
    pub(crate) solution: &'static [u32],
    pub(crate) error: Kind,
}

const SEED: &[u8] = &[
    0x25, 0x5b, 0xa0, 0x93, 0x09, 0x99, 0x8d, 0x31, 0x77, 0x80, 0xa5, 0xb3, 0xb4, 0xab, 0x89,
    0x04, 0x37, 0x3d, 0xdc, 0xde, 0xfb, 0x25, 0x5f, 0x33, 0x64, 0x9a, 0x4b, 0xc9, 0x90, 0x44,
    0x15, 0x0f,
];

pub(crate) const INVALID_TEST_VECTORS: &[TestVector] = &[
    // Unmodified valid solution (nonce 6): [
    //     30203, 39560, 7733, 35464, 53786, 57131, 1783, 34174, 6758, 42840, 654, 28110, 15524,
    //     49699, 46736, 55258, 12703, 41689, 37111, 53673, 13927, 53427, 55698, 60432, 18250,
    //     37458, 43710, 61397, 20324, 51597, 31036, 34446,
    // ]

    // Wrong nonce
    TestVector {
        params: Params { n: 90, k: 5 },
        input: SEED,
        nonce: 0,
        solution: &[
            30203, 39560, 7733, 35464, 53786, 57131, 1783, 34174, 6758, 42840, 654, 28110, 15524,
            49699, 46736, 55258, 12703, 41689, 37111, 53673, 13927, 53427, 55698, 60432, 18250,
            37458, 43710, 61397, 20324, 51597, 31036, 34446,
        ],
        error: Kind::Collision,
    },
    // Change one index
    TestVector {
        params: Params { n: 90, k: 5 },
        input: SEED,
        nonce: 6,
        solution: &[
            30204, 39560, 7733, 35464, 53786, 57131, 1783, 34174, 6758, 42840, 654, 28110, 15524,
            49699, 46736, 55258, 12703, 41689, 37111, 53673, 13927, 53427, 55698, 60432, 18250,
            37458, 43710, 61397, 20324, 51597, 31036, 34446,
        ],
        error: Kind::Collision,
    },
    // Swap two arbitrary indices
    TestVector {
        params: Params { n: 90, k: 5 },
        input: SEED,
        nonce: 6,
        solution: &[
            30203, 39560, 7733, 35464, 53786, 13927, 1783, 34174, 6758, 42840, 654, 28110, 15524,
            49699, 46736, 55258, 12703, 41689, 37111, 53673, 57131, 53427, 55698, 60432, 18250,
            37458, 43710, 61397, 20324, 51597, 31036, 34446,
        ],
        error: Kind::Collision,
    },
    // Reverse the first pair of indices
    TestVector {
        params: Params { n: 90, k: 5 },
        input: SEED,
        nonce: 6,
        solution: &[
            39560, 30203, 7733, 35464, 53786, 57131, 1783, 34174, 6758, 42840, 654, 28110, 15524,
            49699, 46736, 55258, 12703, 41689, 37111, 53673, 13927, 53427, 55698, 60432, 18250,
            37458, 43710, 61397, 20324, 51597, 31036, 34446,
        ],
        error: Kind::OutOfOrder,
    },
    // Swap the two halves of the solution
    TestVector {
        params: Params { n: 90, k: 5 },
        input: SEED,
        nonce: 6,
        solution: &[
            12703, 41689, 37111, 53673, 13927, 53427, 55698, 60432, 18250, 37458, 43710, 61397,
            20324, 51597, 31036, 34446, 30203, 39560, 7733, 35464, 53786, 57131, 1783, 34174,
            6758, 42840, 654, 28110, 15524, 49699, 46736, 55258,
        ],
        error: Kind::OutOfOrder,
    },
    // Duplicate the first index
    TestVector {
        params: Params { n: 90, k: 5 },
        input: SEED,
        nonce: 6,
        solution: &[
            30203, 30203, 7733, 35464, 53786, 57131, 1783, 34174, 6758, 42840, 654, 28110, 15524,
            49699, 46736, 55258, 12703, 41689, 37111, 53673, 13927, 53427, 55698, 60432, 18250,
            37458, 43710, 61397, 20324, 51597, 31036, 34446,
        ],
        error: Kind::DuplicateIdxs,
    },
    // Duplicate the first pair of indices
    TestVector {
        params: Params { n: 90, k: 5 },
        input: SEED,
        nonce: 6,
        solution: &[
            30203, 39560, 30203, 39560, 53786, 57131, 1783, 34174, 6758, 42840, 654, 28110, 15524,
            49699, 46736, 55258, 12703, 41689, 37111, 53673, 13927, 53427, 55698, 60432, 18250,
            37458, 43710, 61397, 20324, 51597, 31036, 34446,
        ],
        error: Kind::DuplicateIdxs,
    },
    // Duplicate the first half of the solution
    TestVector {
        params: Params { n: 90, k: 5 },
        input: SEED,
        nonce: 6,
        solution: &[
            30203, 39560, 7733, 35464, 53786, 57131, 1783, 34174, 6758, 42840, 654, 28110, 15524,
            49699, 46736, 55258, 30203, 39560, 7733, 35464, 53786, 57131, 1783, 34174, 6758,
            42840, 654, 28110, 15524, 49699, 46736, 55258,
        ],
        error: Kind::DuplicateIdxs,
    },
    // Index beyond the base list
    TestVector {
        params: Params { n: 90, k: 5 },
        input: SEED,
        nonce: 6,
        solution: &[
            30203, 39560, 7733, 65536, 53786, 57131, 1783, 34174, 6758, 42840, 654, 28110, 15524,
            49699, 46736, 55258, 12703, 41689, 37111, 53673, 13927, 53427, 55698, 60432, 18250,
            37458, 43710, 61397, 20324, 51597, 31036, 34446,
        ],
        error: Kind::IndexOutOfRange,
    },
    // Truncated solution
    TestVector {
        params: Params { n: 90, k: 5 },
        input: SEED,
        nonce: 6,
        solution: &[
            30203, 39560, 7733, 35464, 53786, 57131, 1783, 34174, 6758, 42840, 654, 28110, 15524,
            49699, 46736, 55258,
        ],
        error: Kind::SolutionLength,
    },
    // Final-round collision candidate whose last block does not cancel
    TestVector {
        params: Params { n: 90, k: 5 },
        input: SEED,
        nonce: 6,
        solution: &[
            2381, 2766, 39686, 56394, 24815, 52704, 15751, 23086, 6368, 45891, 240, 10133, 7905,
            13761, 4631, 65466, 10790, 14346, 32583, 62208, 31626, 44753, 60519, 65174, 18710,
            41907, 33319, 55638, 12692, 45657, 5660, 48130,
        ],
        error: Kind::NonZeroRootHash,
    },
    TestVector {
        params: Params { n: 32, k: 3 },
        input: b"block header",
        nonce: 2,
        solution: &[178, 357, 115, 153, 192, 242, 0, 91],
        error: Kind::NonZeroRootHash,
    },
    TestVector {
        params: Params { n: 20, k: 1 },
        input: b"",
        nonce: 2,
        solution: &[1413, 1737],
        error: Kind::NonZeroRootHash,
    },
];
