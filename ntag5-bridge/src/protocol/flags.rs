// ntag5-bridge/src/protocol/flags.rs

/// ISO15693 request flags.
///
/// Bits 5 and 4 are shared: with `inventory` set they carry `single_slot`
/// and `afi`, otherwise `address` and `select`. The pair not selected by
/// `inventory` is ignored when encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RequestFlags {
    pub double_sub_carrier: bool,
    pub high_data_rate: bool,
    pub inventory: bool,
    pub protocol_extension: bool,
    pub afi: bool,
    pub single_slot: bool,
    pub option: bool,
    pub select: bool,
    pub address: bool,
}

impl RequestFlags {
    /// The same flags in addressed mode, as SELECT requires.
    pub fn addressed(self) -> Self {
        Self {
            address: true,
            ..self
        }
    }

    /// Encode as the request flags byte (bit 7 is RFU and always zero).
    pub fn encode(&self) -> u8 {
        let (bit5, bit4) = if self.inventory {
            (self.single_slot, self.afi)
        } else {
            (self.address, self.select)
        };

        (self.option as u8) << 6
            | (bit5 as u8) << 5
            | (bit4 as u8) << 4
            | (self.protocol_extension as u8) << 3
            | (self.inventory as u8) << 2
            | (self.high_data_rate as u8) << 1
            | self.double_sub_carrier as u8
    }
}

impl From<RequestFlags> for u8 {
    fn from(flags: RequestFlags) -> u8 {
        flags.encode()
    }
}
