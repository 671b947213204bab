use anyhow::Result;
use learngl::HelloTriangleEx2;

fn main() -> Result<()> {
    learngl::main_with::<HelloTriangleEx2>()
}
