use durablock_protocol::BlockTypeTable;

/// A small registry with a mix of solid and non-solid blocks.
pub fn stub_registry() -> BlockTypeTable {
    BlockTypeTable::from_iter([
        ("OBSIDIAN", true),
        ("ENDER_CHEST", true),
        ("ENCHANTMENT_TABLE", true),
        ("ANVIL", true),
        ("BEDROCK", true),
        ("POTATO_ITEM", true),
        ("WATER", false),
        ("LAVA", false),
        ("TORCH", false),
    ])
}
