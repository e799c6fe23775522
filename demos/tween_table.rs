use keytween::{Ease, TweenSpec};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // A hop: rise for a quarter second, then bounce back down.
    let rise = TweenSpec::builder()
        .start(0.0)
        .delta(-40.0)
        .ease(Ease::OutSine)
        .duration(0.25)
        .build()?;
    let drop = TweenSpec::builder()
        .start(-40.0)
        .end(0.0)
        .ease(Ease::OutBounce)
        .duration(0.75)
        .build()?;

    for (name, spec) in [("rise", &rise), ("drop", &drop)] {
        println!("{name}: {} keyframes", spec.table().len());
        for k in spec.table() {
            println!("  t={:.4} y={:.3}", k.time, k.value);
        }
    }
    Ok(())
}
