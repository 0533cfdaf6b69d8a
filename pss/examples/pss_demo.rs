use mgf1::Sha256;
use pss::{EncodingMethod, Pssr, PssrRaw};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    let mut rng = StdRng::seed_from_u64(42);

    let mut signer = Pssr::new(Sha256::default());
    signer.update(b"hello pss");
    let digest = signer.finish_digest().expect("digest");
    let em = signer.encode(&digest, 2047, &mut rng).expect("encode");

    let mut verifier = Pssr::new(Sha256::default());
    verifier.update(b"hello pss");
    let digest = verifier.finish_digest().expect("digest");
    let ok = verifier.verify(&em, &digest, 2047);
    assert!(ok);

    // Raw variant: the digest is computed once and passed through verbatim.
    let mut raw = PssrRaw::new(Sha256::default());
    raw.update(&digest);
    let passthrough = raw.finish_digest().expect("raw digest");
    assert_eq!(passthrough, digest);
    assert!(raw.verify(&em, &passthrough, 2047));

    println!("{} ok", verifier.name());
}
