use rand::Rng;

// random uppercase A-Z text of the given length
#[allow(dead_code)]
pub fn rand_upper(rng: &mut impl Rng, len: usize) -> String {
    (0..len)
        .map(|_| (b'A' + rng.gen_range::<u8, u8, u8>(0, 26)) as char)
        .collect()
}

// random printable ASCII text without whitespace or the columnar filler
#[allow(dead_code)]
pub fn rand_printable(rng: &mut impl Rng, len: usize) -> String {
    (0..len)
        .map(|_| rng.gen_range::<u8, u8, u8>(0x21, 0x7f) as char)
        .filter(|&c| c != '_')
        .collect()
}

// key with no repeated characters
#[allow(dead_code)]
pub fn rand_distinct_key(rng: &mut impl Rng, len: usize) -> String {
    let mut letters: Vec<char> = ('A'..='Z').collect();
    let mut res = String::with_capacity(len);
    for _ in 0..len.min(26) {
        let i = rng.gen_range::<usize, usize, usize>(0, letters.len());
        res.push(letters.remove(i));
    }
    res
}
