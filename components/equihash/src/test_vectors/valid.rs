use crate::params::Params;

pub(crate) struct CanonicalVector {
    pub(crate) params: Params,
    pub(crate) seed: &'static str,
    pub(crate) nonce: u32,
    pub(crate) proof: &'static str,
    pub(crate) minimal: &'static str,
    pub(crate) indices: &'static [u32],
}

/// The first solution for this seed at `(90, 5)`, found with nonce 6.
pub(crate) const CANONICAL: CanonicalVector = CanonicalVector {
    params: Params { n: 90, k: 5 },
    seed: "255ba09309998d317780a5b3b4ab8904373ddcdefb255f33649a4bc99044150f",
    nonce: 6,
    proof: "fb750000889a0000351e0000888a00001ad200002bdf0000f70600007e850000\
            661a000058a700008e020000ce6d0000a43c000023c2000090b60000dad70000\
            9f310000d9a20000f7900000a9d1000067360000b3d0000092d9000010ec0000\
            4a47000052920000beaa0000d5ef0000644f00008dc900003c7900008e860000",
    minimal: "75fb9a881e358a88d21adf2b06f7857e1a66a758028e6dce3ca4c223b690d7da\
              319fa2d990f7d1a93667d0b3d992ec10474a9252aabeefd54f64c98d793c868e",
    indices: &[
        30203, 39560, 7733, 35464, 53786, 57131, 1783, 34174, 6758, 42840, 654, 28110, 15524,
        49699, 46736, 55258, 12703, 41689, 37111, 53673, 13927, 53427, 55698, 60432, 18250,
        37458, 43710, 61397, 20324, 51597, 31036, 34446,
    ],
};

pub(crate) struct TestVector {
    pub(crate) params: Params,
    pub(crate) input: &'static [u8],
    pub(crate) nonce: u32,
    /// The first solution the solver finds for `input`.
    pub(crate) solution: &'static [u32],
}

pub(crate) const VALID_TEST_VECTORS: &[TestVector] = &[
    TestVector {
        params: Params { n: 20, k: 1 },
        input: b"",
        nonce: 2,
        solution: &[358, 1126],
    },
    TestVector {
        params: Params { n: 24, k: 2 },
        input: b"Equihash is an asymmetric PoW",
        nonce: 2,
        solution: &[29, 296, 305, 486],
    },
    TestVector {
        params: Params { n: 32, k: 3 },
        input: b"block header",
        nonce: 2,
        solution: &[362, 426, 145, 506, 36, 487, 56, 416],
    },
    TestVector {
        params: Params { n: 40, k: 4 },
        input: b"",
        nonce: 3,
        solution: &[
            78, 271, 25, 489, 390, 451, 174, 358, 287, 436, 159, 459, 148, 369, 37, 276,
        ],
    },
    TestVector {
        params: Params { n: 48, k: 5 },
        input: &[
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d,
            0x0e, 0x0f, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1a, 0x1b,
            0x1c, 0x1d, 0x1e, 0x1f,
        ],
        nonce: 8,
        solution: &[
            39, 239, 136, 425, 255, 436, 75, 441, 348, 400, 90, 332, 25, 387, 247, 403, 147, 209,
            207, 502, 442, 456, 183, 278, 229, 302, 167, 283, 100, 146, 149, 192,
        ],
    },
];
