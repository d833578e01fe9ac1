/// Prints `count` freshly generated policy-compliant passwords to stdout.
/// Purely local; no host is contacted.
pub fn sample(count: usize) -> anyhow::Result<()> {
    for _ in 0..count {
        let password: String = rekey_core::generate::generate()?;
        println!("{password}");
    }
    Ok(())
}
