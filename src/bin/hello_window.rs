use anyhow::Result;
use learngl::HelloWindow;

fn main() -> Result<()> {
    learngl::main_with::<HelloWindow>()
}
