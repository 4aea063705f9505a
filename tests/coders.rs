use polybase::coders::XMR_BLOCK_LEN;
use polybase::registry::{self, CODERS};
use polybase::{convert_radix, convert_radix2, ErrorKind};
use polybase::{BASE32, BASE58XMR, BASE64, BECH32, BECH32M, HEX, UTF8};
use rand::Rng;

fn random_bytes(rng: &mut impl Rng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen()).collect()
}

#[test]
fn every_coder_round_trips() {
    let mut rng = rand::thread_rng();
    for &(name, coder) in CODERS.iter().filter(|&&(n, _)| n != "utf8") {
        for len in 0..40 {
            let mut bytes = random_bytes(&mut rng, len);
            // Leading zeros take a separate path through the radix coders.
            if len > 2 && rng.gen_bool(0.5) {
                bytes[0] = 0;
                bytes[1] = 0;
            }
            let text = coder.encode(&bytes).unwrap();
            let decoded = coder.decode(&text).unwrap_or_else(|e| {
                panic!("{}: could not decode {:?}: {}", name, text, e)
            });
            assert_eq!(decoded, bytes, "{} via {:?}", name, text);
        }
    }
}

#[test]
fn utf8_round_trips_text() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let len = rng.gen_range(0..20);
        let s: String = (0..len).map(|_| rng.gen::<char>()).collect();
        let text = UTF8.encode(s.as_bytes()).unwrap();
        assert_eq!(text, s);
        assert_eq!(UTF8.decode(&text).unwrap(), s.as_bytes());
    }
    let err = UTF8.encode(&[0x61, 0xff]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgumentType);
}

#[test]
fn radix_round_trips() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let from = rng.gen_range(2..=256);
        let to = rng.gen_range(2..=256);
        let len = rng.gen_range(1..16);
        let mut digits: Vec<u32> =
            (0..len).map(|_| rng.gen_range(0..from)).collect();
        if rng.gen_bool(0.5) {
            digits[0] = 0;
        }
        let converted = convert_radix(&digits, from, to).unwrap();
        assert!(converted.iter().all(|&d| d < to));
        let back = convert_radix(&converted, to, from).unwrap();
        assert_eq!(back, digits, "{} -> {} -> {}", from, to, from);
    }
}

#[test]
fn radix2_round_trips() {
    let mut rng = rand::thread_rng();
    for bits in 1..=8 {
        let bytes: Vec<u32> = (0..24).map(|_| rng.gen_range(0..256)).collect();
        let words = convert_radix2(&bytes, 8, bits, true).unwrap();
        assert!(words.iter().all(|&w| w < 1 << bits));
        assert_eq!(convert_radix2(&words, bits, 8, false).unwrap(), bytes);
    }
    let err = convert_radix2(&[1], 31, 8, false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OverflowGuard);
}

#[test]
fn xmr_block_lengths() {
    let mut rng = rand::thread_rng();
    for (len, &width) in XMR_BLOCK_LEN.iter().enumerate() {
        let bytes = random_bytes(&mut rng, len);
        assert_eq!(BASE58XMR.encode(&bytes).unwrap().len(), width);
    }
    let bytes = random_bytes(&mut rng, 8 * 3 + 5);
    let text = BASE58XMR.encode(&bytes).unwrap();
    assert_eq!(text.len(), 11 * 3 + 7);
    assert_eq!(BASE58XMR.decode(&text).unwrap(), bytes);

    let err = BASE58XMR.decode("1111").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StructuralFormat);
}

#[test]
fn known_vectors() {
    assert_eq!(HEX.encode(&[0xde, 0xad, 0xbe, 0xef]).unwrap(), "deadbeef");
    assert_eq!(BASE64.encode(b"Man").unwrap(), "TWFu");
    assert_eq!(BASE64.decode("TWE=").unwrap(), b"Ma");
    assert_eq!(BASE32.encode(b"f").unwrap(), "MY======");
    assert_eq!(registry::bytes_to_string("base58", b"a").unwrap(), "2g");

    let decoded = BECH32.decode("a12uel5l").unwrap();
    assert_eq!(decoded.prefix, "a");
    assert!(decoded.words.is_empty());
    let decoded = BECH32M.decode("a1lqfn3a").unwrap();
    assert_eq!(decoded.prefix, "a");
    assert!(decoded.words.is_empty());
}

#[test]
fn bech32_detects_substitutions() {
    let mut rng = rand::thread_rng();
    let charset = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";
    let words = BECH32.to_words(&random_bytes(&mut rng, 20)).unwrap();
    let encoded = BECH32.encode("bc", &words).unwrap();
    assert_eq!(BECH32.decode(&encoded).unwrap().words, words);
    assert!(BECH32M.decode_opt(&encoded).is_none());

    let data_start = encoded.find('1').unwrap() + 1;
    for i in data_start..encoded.len() {
        let original = encoded.as_bytes()[i] as char;
        let replacement = charset.chars().find(|&c| c != original).unwrap();
        let mut corrupted = encoded.clone();
        corrupted.replace_range(i..i + 1, &replacement.to_string());
        let err = BECH32.decode(&corrupted).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ChecksumMismatch, "{}", corrupted);
    }
}

#[test]
fn bech32_bytes_round_trip() {
    let mut rng = rand::thread_rng();
    for len in 0..40 {
        let bytes = random_bytes(&mut rng, len);
        let words = BECH32M.to_words(&bytes).unwrap();
        let encoded = BECH32M.encode("tb", &words).unwrap();
        let decoded = BECH32M.decode_to_bytes(&encoded).unwrap();
        assert_eq!(decoded.prefix, "tb");
        assert_eq!(decoded.words, words);
        assert_eq!(decoded.bytes, bytes);
    }
}
