use anyhow::Result;
use learngl::HelloWindowEsc;

fn main() -> Result<()> {
    learngl::main_with::<HelloWindowEsc>()
}
