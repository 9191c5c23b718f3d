//! Opcode descriptor tables for the SM83 instruction set.
//!
//! Two dense 256-entry constant tables serve as the single source of truth
//! for decoding: [`OPCODE_TABLE`] for the primary map (with `None` holes at
//! the eleven undefined bytes) and [`CB_OPCODE_TABLE`] for the 0xCB-prefixed
//! secondary map, which is dense by construction.
//!
//! Each entry carries the mnemonic (for tracing), the encoded length in
//! bytes, the base cost in T-cycles, and a handler selector: a small
//! discriminated [`Op`]/[`CbOp`] value whose parameters (register selector,
//! condition, bit index) are everything the executor needs. The decoder
//! never looks at operand bytes; handlers fetch those themselves.

use super::regs::Reg16;

/// 8-bit operand selector: a register, or memory addressed through HL.
///
/// The discriminant order matches the standard SM83 operand encoding
/// (0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target8 {
    B,
    C,
    D,
    E,
    H,
    L,
    /// Memory operand addressed through the HL pair.
    HlInd,
    A,
}

impl Target8 {
    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => Target8::B,
            1 => Target8::C,
            2 => Target8::D,
            3 => Target8::E,
            4 => Target8::H,
            5 => Target8::L,
            6 => Target8::HlInd,
            _ => Target8::A,
        }
    }
}

/// Branch condition of the conditional jump/call/return forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cond {
    /// Z clear.
    Nz,
    /// Z set.
    Z,
    /// C clear.
    Nc,
    /// C set.
    C,
}

/// 8-bit accumulator arithmetic/logic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbc,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Cp,
        }
    }
}

/// Rotate/shift operator shared by the inline A forms and the CB block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotOp {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

impl RotOp {
    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => RotOp::Rlc,
            1 => RotOp::Rrc,
            2 => RotOp::Rl,
            3 => RotOp::Rr,
            4 => RotOp::Sla,
            5 => RotOp::Sra,
            6 => RotOp::Swap,
            _ => RotOp::Srl,
        }
    }
}

/// Handler selector for a primary-table instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Nop,
    Stop,
    Halt,
    Di,
    Ei,
    /// Escape into the CB table; never reaches the executor.
    Prefix,

    // 8-bit loads.
    LdRR(Target8, Target8),
    LdRD8(Target8),
    LdAFromBc,
    LdAFromDe,
    LdAToBc,
    LdAToDe,
    LdAFromA16,
    LdAToA16,
    LdhAFromA8,
    LdhAToA8,
    LdhAFromC,
    LdhAToC,
    LdAFromHlInc,
    LdAFromHlDec,
    LdAToHlInc,
    LdAToHlDec,

    // 16-bit loads.
    LdRrD16(Reg16),
    LdSpHl,
    LdA16Sp,
    LdHlSpE,
    Push(Reg16),
    Pop(Reg16),

    // 8-bit arithmetic.
    Alu(AluOp, Target8),
    AluD8(AluOp),
    Inc8(Target8),
    Dec8(Target8),

    // 16-bit arithmetic.
    Inc16(Reg16),
    Dec16(Reg16),
    AddHlRr(Reg16),
    AddSpE,

    // Inline rotates on A and accumulator misc.
    RotA(RotOp),
    Daa,
    Cpl,
    Scf,
    Ccf,

    // Control flow.
    JpA16,
    JpCcA16(Cond),
    JpHl,
    JrE,
    JrCcE(Cond),
    CallA16,
    CallCcA16(Cond),
    Ret,
    RetCc(Cond),
    Reti,
    /// Restart; the parameter is the target address (0x00..=0x38).
    Rst(u8),
}

/// Handler selector for a CB-table instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CbOp {
    Rotate(RotOp, Target8),
    Bit(u8, Target8),
    Res(u8, Target8),
    Set(u8, Target8),
}

/// Descriptor of one primary-table instruction.
#[derive(Clone, Copy, Debug)]
pub struct Instr {
    /// Canonical mnemonic, used for trace logging.
    pub mnemonic: &'static str,
    /// Encoded length in bytes, operands included.
    pub length: u8,
    /// Base cost in T-cycles; conditional forms add their penalty on top.
    pub cycles: u8,
    pub op: Op,
}

/// Descriptor of one CB-table instruction.
///
/// Length and cycles cover the whole prefixed instruction, the 0xCB fetch
/// included, matching the canonical opcode chart.
#[derive(Clone, Copy, Debug)]
pub struct CbInstr {
    pub mnemonic: &'static str,
    pub length: u8,
    pub cycles: u8,
    pub op: CbOp,
}

const fn instr(mnemonic: &'static str, length: u8, cycles: u8, op: Op) -> Option<Instr> {
    Some(Instr {
        mnemonic,
        length,
        cycles,
        op,
    })
}

const LD_RR_MNEMONICS: [&str; 64] = [
    "LD B,B", "LD B,C", "LD B,D", "LD B,E", "LD B,H", "LD B,L", "LD B,(HL)", "LD B,A",
    "LD C,B", "LD C,C", "LD C,D", "LD C,E", "LD C,H", "LD C,L", "LD C,(HL)", "LD C,A",
    "LD D,B", "LD D,C", "LD D,D", "LD D,E", "LD D,H", "LD D,L", "LD D,(HL)", "LD D,A",
    "LD E,B", "LD E,C", "LD E,D", "LD E,E", "LD E,H", "LD E,L", "LD E,(HL)", "LD E,A",
    "LD H,B", "LD H,C", "LD H,D", "LD H,E", "LD H,H", "LD H,L", "LD H,(HL)", "LD H,A",
    "LD L,B", "LD L,C", "LD L,D", "LD L,E", "LD L,H", "LD L,L", "LD L,(HL)", "LD L,A",
    "LD (HL),B", "LD (HL),C", "LD (HL),D", "LD (HL),E", "LD (HL),H", "LD (HL),L", "HALT", "LD (HL),A",
    "LD A,B", "LD A,C", "LD A,D", "LD A,E", "LD A,H", "LD A,L", "LD A,(HL)", "LD A,A",
];

const ALU_MNEMONICS: [&str; 64] = [
    "ADD A,B", "ADD A,C", "ADD A,D", "ADD A,E", "ADD A,H", "ADD A,L", "ADD A,(HL)", "ADD A,A",
    "ADC A,B", "ADC A,C", "ADC A,D", "ADC A,E", "ADC A,H", "ADC A,L", "ADC A,(HL)", "ADC A,A",
    "SUB B", "SUB C", "SUB D", "SUB E", "SUB H", "SUB L", "SUB (HL)", "SUB A",
    "SBC A,B", "SBC A,C", "SBC A,D", "SBC A,E", "SBC A,H", "SBC A,L", "SBC A,(HL)", "SBC A,A",
    "AND B", "AND C", "AND D", "AND E", "AND H", "AND L", "AND (HL)", "AND A",
    "XOR B", "XOR C", "XOR D", "XOR E", "XOR H", "XOR L", "XOR (HL)", "XOR A",
    "OR B", "OR C", "OR D", "OR E", "OR H", "OR L", "OR (HL)", "OR A",
    "CP B", "CP C", "CP D", "CP E", "CP H", "CP L", "CP (HL)", "CP A",
];

const CB_MNEMONICS: [&str; 256] = [
    "RLC B", "RLC C", "RLC D", "RLC E", "RLC H", "RLC L", "RLC (HL)", "RLC A",
    "RRC B", "RRC C", "RRC D", "RRC E", "RRC H", "RRC L", "RRC (HL)", "RRC A",
    "RL B", "RL C", "RL D", "RL E", "RL H", "RL L", "RL (HL)", "RL A",
    "RR B", "RR C", "RR D", "RR E", "RR H", "RR L", "RR (HL)", "RR A",
    "SLA B", "SLA C", "SLA D", "SLA E", "SLA H", "SLA L", "SLA (HL)", "SLA A",
    "SRA B", "SRA C", "SRA D", "SRA E", "SRA H", "SRA L", "SRA (HL)", "SRA A",
    "SWAP B", "SWAP C", "SWAP D", "SWAP E", "SWAP H", "SWAP L", "SWAP (HL)", "SWAP A",
    "SRL B", "SRL C", "SRL D", "SRL E", "SRL H", "SRL L", "SRL (HL)", "SRL A",
    "BIT 0,B", "BIT 0,C", "BIT 0,D", "BIT 0,E", "BIT 0,H", "BIT 0,L", "BIT 0,(HL)", "BIT 0,A",
    "BIT 1,B", "BIT 1,C", "BIT 1,D", "BIT 1,E", "BIT 1,H", "BIT 1,L", "BIT 1,(HL)", "BIT 1,A",
    "BIT 2,B", "BIT 2,C", "BIT 2,D", "BIT 2,E", "BIT 2,H", "BIT 2,L", "BIT 2,(HL)", "BIT 2,A",
    "BIT 3,B", "BIT 3,C", "BIT 3,D", "BIT 3,E", "BIT 3,H", "BIT 3,L", "BIT 3,(HL)", "BIT 3,A",
    "BIT 4,B", "BIT 4,C", "BIT 4,D", "BIT 4,E", "BIT 4,H", "BIT 4,L", "BIT 4,(HL)", "BIT 4,A",
    "BIT 5,B", "BIT 5,C", "BIT 5,D", "BIT 5,E", "BIT 5,H", "BIT 5,L", "BIT 5,(HL)", "BIT 5,A",
    "BIT 6,B", "BIT 6,C", "BIT 6,D", "BIT 6,E", "BIT 6,H", "BIT 6,L", "BIT 6,(HL)", "BIT 6,A",
    "BIT 7,B", "BIT 7,C", "BIT 7,D", "BIT 7,E", "BIT 7,H", "BIT 7,L", "BIT 7,(HL)", "BIT 7,A",
    "RES 0,B", "RES 0,C", "RES 0,D", "RES 0,E", "RES 0,H", "RES 0,L", "RES 0,(HL)", "RES 0,A",
    "RES 1,B", "RES 1,C", "RES 1,D", "RES 1,E", "RES 1,H", "RES 1,L", "RES 1,(HL)", "RES 1,A",
    "RES 2,B", "RES 2,C", "RES 2,D", "RES 2,E", "RES 2,H", "RES 2,L", "RES 2,(HL)", "RES 2,A",
    "RES 3,B", "RES 3,C", "RES 3,D", "RES 3,E", "RES 3,H", "RES 3,L", "RES 3,(HL)", "RES 3,A",
    "RES 4,B", "RES 4,C", "RES 4,D", "RES 4,E", "RES 4,H", "RES 4,L", "RES 4,(HL)", "RES 4,A",
    "RES 5,B", "RES 5,C", "RES 5,D", "RES 5,E", "RES 5,H", "RES 5,L", "RES 5,(HL)", "RES 5,A",
    "RES 6,B", "RES 6,C", "RES 6,D", "RES 6,E", "RES 6,H", "RES 6,L", "RES 6,(HL)", "RES 6,A",
    "RES 7,B", "RES 7,C", "RES 7,D", "RES 7,E", "RES 7,H", "RES 7,L", "RES 7,(HL)", "RES 7,A",
    "SET 0,B", "SET 0,C", "SET 0,D", "SET 0,E", "SET 0,H", "SET 0,L", "SET 0,(HL)", "SET 0,A",
    "SET 1,B", "SET 1,C", "SET 1,D", "SET 1,E", "SET 1,H", "SET 1,L", "SET 1,(HL)", "SET 1,A",
    "SET 2,B", "SET 2,C", "SET 2,D", "SET 2,E", "SET 2,H", "SET 2,L", "SET 2,(HL)", "SET 2,A",
    "SET 3,B", "SET 3,C", "SET 3,D", "SET 3,E", "SET 3,H", "SET 3,L", "SET 3,(HL)", "SET 3,A",
    "SET 4,B", "SET 4,C", "SET 4,D", "SET 4,E", "SET 4,H", "SET 4,L", "SET 4,(HL)", "SET 4,A",
    "SET 5,B", "SET 5,C", "SET 5,D", "SET 5,E", "SET 5,H", "SET 5,L", "SET 5,(HL)", "SET 5,A",
    "SET 6,B", "SET 6,C", "SET 6,D", "SET 6,E", "SET 6,H", "SET 6,L", "SET 6,(HL)", "SET 6,A",
    "SET 7,B", "SET 7,C", "SET 7,D", "SET 7,E", "SET 7,H", "SET 7,L", "SET 7,(HL)", "SET 7,A",
];

/// Primary decode table, indexed by the first fetched opcode byte.
///
/// Exactly eleven entries are `None`: the SM83 opcode holes 0xD3, 0xDB,
/// 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC and 0xFD. Executing one
/// of them is a fatal decode error.
pub const OPCODE_TABLE: [Option<Instr>; 256] = {
    use Op::*;

    let mut t: [Option<Instr>; 256] = [None; 256];

    t[0x00] = instr("NOP", 1, 4, Nop);
    t[0x01] = instr("LD BC,d16", 3, 12, LdRrD16(Reg16::BC));
    t[0x02] = instr("LD (BC),A", 1, 8, LdAToBc);
    t[0x03] = instr("INC BC", 1, 8, Inc16(Reg16::BC));
    t[0x04] = instr("INC B", 1, 4, Inc8(Target8::B));
    t[0x05] = instr("DEC B", 1, 4, Dec8(Target8::B));
    t[0x06] = instr("LD B,d8", 2, 8, LdRD8(Target8::B));
    t[0x07] = instr("RLCA", 1, 4, RotA(RotOp::Rlc));
    t[0x08] = instr("LD (a16),SP", 3, 20, LdA16Sp);
    t[0x09] = instr("ADD HL,BC", 1, 8, AddHlRr(Reg16::BC));
    t[0x0A] = instr("LD A,(BC)", 1, 8, LdAFromBc);
    t[0x0B] = instr("DEC BC", 1, 8, Dec16(Reg16::BC));
    t[0x0C] = instr("INC C", 1, 4, Inc8(Target8::C));
    t[0x0D] = instr("DEC C", 1, 4, Dec8(Target8::C));
    t[0x0E] = instr("LD C,d8", 2, 8, LdRD8(Target8::C));
    t[0x0F] = instr("RRCA", 1, 4, RotA(RotOp::Rrc));
    t[0x10] = instr("STOP", 2, 4, Stop);
    t[0x11] = instr("LD DE,d16", 3, 12, LdRrD16(Reg16::DE));
    t[0x12] = instr("LD (DE),A", 1, 8, LdAToDe);
    t[0x13] = instr("INC DE", 1, 8, Inc16(Reg16::DE));
    t[0x14] = instr("INC D", 1, 4, Inc8(Target8::D));
    t[0x15] = instr("DEC D", 1, 4, Dec8(Target8::D));
    t[0x16] = instr("LD D,d8", 2, 8, LdRD8(Target8::D));
    t[0x17] = instr("RLA", 1, 4, RotA(RotOp::Rl));
    t[0x18] = instr("JR r8", 2, 12, JrE);
    t[0x19] = instr("ADD HL,DE", 1, 8, AddHlRr(Reg16::DE));
    t[0x1A] = instr("LD A,(DE)", 1, 8, LdAFromDe);
    t[0x1B] = instr("DEC DE", 1, 8, Dec16(Reg16::DE));
    t[0x1C] = instr("INC E", 1, 4, Inc8(Target8::E));
    t[0x1D] = instr("DEC E", 1, 4, Dec8(Target8::E));
    t[0x1E] = instr("LD E,d8", 2, 8, LdRD8(Target8::E));
    t[0x1F] = instr("RRA", 1, 4, RotA(RotOp::Rr));
    t[0x20] = instr("JR NZ,r8", 2, 8, JrCcE(Cond::Nz));
    t[0x21] = instr("LD HL,d16", 3, 12, LdRrD16(Reg16::HL));
    t[0x22] = instr("LD (HL+),A", 1, 8, LdAToHlInc);
    t[0x23] = instr("INC HL", 1, 8, Inc16(Reg16::HL));
    t[0x24] = instr("INC H", 1, 4, Inc8(Target8::H));
    t[0x25] = instr("DEC H", 1, 4, Dec8(Target8::H));
    t[0x26] = instr("LD H,d8", 2, 8, LdRD8(Target8::H));
    t[0x27] = instr("DAA", 1, 4, Daa);
    t[0x28] = instr("JR Z,r8", 2, 8, JrCcE(Cond::Z));
    t[0x29] = instr("ADD HL,HL", 1, 8, AddHlRr(Reg16::HL));
    t[0x2A] = instr("LD A,(HL+)", 1, 8, LdAFromHlInc);
    t[0x2B] = instr("DEC HL", 1, 8, Dec16(Reg16::HL));
    t[0x2C] = instr("INC L", 1, 4, Inc8(Target8::L));
    t[0x2D] = instr("DEC L", 1, 4, Dec8(Target8::L));
    t[0x2E] = instr("LD L,d8", 2, 8, LdRD8(Target8::L));
    t[0x2F] = instr("CPL", 1, 4, Cpl);
    t[0x30] = instr("JR NC,r8", 2, 8, JrCcE(Cond::Nc));
    t[0x31] = instr("LD SP,d16", 3, 12, LdRrD16(Reg16::SP));
    t[0x32] = instr("LD (HL-),A", 1, 8, LdAToHlDec);
    t[0x33] = instr("INC SP", 1, 8, Inc16(Reg16::SP));
    t[0x34] = instr("INC (HL)", 1, 12, Inc8(Target8::HlInd));
    t[0x35] = instr("DEC (HL)", 1, 12, Dec8(Target8::HlInd));
    t[0x36] = instr("LD (HL),d8", 2, 12, LdRD8(Target8::HlInd));
    t[0x37] = instr("SCF", 1, 4, Scf);
    t[0x38] = instr("JR C,r8", 2, 8, JrCcE(Cond::C));
    t[0x39] = instr("ADD HL,SP", 1, 8, AddHlRr(Reg16::SP));
    t[0x3A] = instr("LD A,(HL-)", 1, 8, LdAFromHlDec);
    t[0x3B] = instr("DEC SP", 1, 8, Dec16(Reg16::SP));
    t[0x3C] = instr("INC A", 1, 4, Inc8(Target8::A));
    t[0x3D] = instr("DEC A", 1, 4, Dec8(Target8::A));
    t[0x3E] = instr("LD A,d8", 2, 8, LdRD8(Target8::A));
    t[0x3F] = instr("CCF", 1, 4, Ccf);
    t[0xC0] = instr("RET NZ", 1, 8, RetCc(Cond::Nz));
    t[0xC1] = instr("POP BC", 1, 12, Pop(Reg16::BC));
    t[0xC2] = instr("JP NZ,a16", 3, 12, JpCcA16(Cond::Nz));
    t[0xC3] = instr("JP a16", 3, 16, JpA16);
    t[0xC4] = instr("CALL NZ,a16", 3, 12, CallCcA16(Cond::Nz));
    t[0xC5] = instr("PUSH BC", 1, 16, Push(Reg16::BC));
    t[0xC6] = instr("ADD A,d8", 2, 8, AluD8(AluOp::Add));
    t[0xC7] = instr("RST 00H", 1, 16, Rst(0x00));
    t[0xC8] = instr("RET Z", 1, 8, RetCc(Cond::Z));
    t[0xC9] = instr("RET", 1, 16, Ret);
    t[0xCA] = instr("JP Z,a16", 3, 12, JpCcA16(Cond::Z));
    t[0xCB] = instr("PREFIX CB", 1, 4, Prefix);
    t[0xCC] = instr("CALL Z,a16", 3, 12, CallCcA16(Cond::Z));
    t[0xCD] = instr("CALL a16", 3, 24, CallA16);
    t[0xCE] = instr("ADC A,d8", 2, 8, AluD8(AluOp::Adc));
    t[0xCF] = instr("RST 08H", 1, 16, Rst(0x08));
    t[0xD0] = instr("RET NC", 1, 8, RetCc(Cond::Nc));
    t[0xD1] = instr("POP DE", 1, 12, Pop(Reg16::DE));
    t[0xD2] = instr("JP NC,a16", 3, 12, JpCcA16(Cond::Nc));
    t[0xD4] = instr("CALL NC,a16", 3, 12, CallCcA16(Cond::Nc));
    t[0xD5] = instr("PUSH DE", 1, 16, Push(Reg16::DE));
    t[0xD6] = instr("SUB d8", 2, 8, AluD8(AluOp::Sub));
    t[0xD7] = instr("RST 10H", 1, 16, Rst(0x10));
    t[0xD8] = instr("RET C", 1, 8, RetCc(Cond::C));
    t[0xD9] = instr("RETI", 1, 16, Reti);
    t[0xDA] = instr("JP C,a16", 3, 12, JpCcA16(Cond::C));
    t[0xDC] = instr("CALL C,a16", 3, 12, CallCcA16(Cond::C));
    t[0xDE] = instr("SBC A,d8", 2, 8, AluD8(AluOp::Sbc));
    t[0xDF] = instr("RST 18H", 1, 16, Rst(0x18));
    t[0xE0] = instr("LDH (a8),A", 2, 12, LdhAToA8);
    t[0xE1] = instr("POP HL", 1, 12, Pop(Reg16::HL));
    t[0xE2] = instr("LD (C),A", 1, 8, LdhAToC);
    t[0xE5] = instr("PUSH HL", 1, 16, Push(Reg16::HL));
    t[0xE6] = instr("AND d8", 2, 8, AluD8(AluOp::And));
    t[0xE7] = instr("RST 20H", 1, 16, Rst(0x20));
    t[0xE8] = instr("ADD SP,r8", 2, 16, AddSpE);
    t[0xE9] = instr("JP (HL)", 1, 4, JpHl);
    t[0xEA] = instr("LD (a16),A", 3, 16, LdAToA16);
    t[0xEE] = instr("XOR d8", 2, 8, AluD8(AluOp::Xor));
    t[0xEF] = instr("RST 28H", 1, 16, Rst(0x28));
    t[0xF0] = instr("LDH A,(a8)", 2, 12, LdhAFromA8);
    t[0xF1] = instr("POP AF", 1, 12, Pop(Reg16::AF));
    t[0xF2] = instr("LD A,(C)", 1, 8, LdhAFromC);
    t[0xF3] = instr("DI", 1, 4, Di);
    t[0xF5] = instr("PUSH AF", 1, 16, Push(Reg16::AF));
    t[0xF6] = instr("OR d8", 2, 8, AluD8(AluOp::Or));
    t[0xF7] = instr("RST 30H", 1, 16, Rst(0x30));
    t[0xF8] = instr("LD HL,SP+r8", 2, 12, LdHlSpE);
    t[0xF9] = instr("LD SP,HL", 1, 8, LdSpHl);
    t[0xFA] = instr("LD A,(a16)", 3, 16, LdAFromA16);
    t[0xFB] = instr("EI", 1, 4, Ei);
    t[0xFE] = instr("CP d8", 2, 8, AluD8(AluOp::Cp));
    t[0xFF] = instr("RST 38H", 1, 16, Rst(0x38));

    // 0x40..=0x7F: the LD r,r' matrix, with HALT in the (HL),(HL) slot.
    let mut i = 0x40;
    while i < 0x80 {
        if i != 0x76 {
            let dst = Target8::from_bits((i as u8) >> 3);
            let src = Target8::from_bits(i as u8);
            let cycles = if matches!(dst, Target8::HlInd) || matches!(src, Target8::HlInd) {
                8
            } else {
                4
            };
            t[i] = instr(LD_RR_MNEMONICS[i - 0x40], 1, cycles, LdRR(dst, src));
        }
        i += 1;
    }
    t[0x76] = instr("HALT", 1, 4, Halt);

    // 0x80..=0xBF: the accumulator ALU matrix.
    let mut i = 0x80;
    while i < 0xC0 {
        let operator = AluOp::from_bits((i as u8) >> 3);
        let src = Target8::from_bits(i as u8);
        let cycles = if matches!(src, Target8::HlInd) { 8 } else { 4 };
        t[i] = instr(ALU_MNEMONICS[i - 0x80], 1, cycles, Alu(operator, src));
        i += 1;
    }

    t
};

/// Secondary decode table for 0xCB-prefixed instructions, indexed by the
/// byte fetched after the prefix. Dense: every byte decodes.
pub const CB_OPCODE_TABLE: [CbInstr; 256] = {
    let mut t = [CbInstr {
        mnemonic: "",
        length: 2,
        cycles: 8,
        op: CbOp::Bit(0, Target8::B),
    }; 256];

    let mut i = 0;
    while i < 256 {
        let byte = i as u8;
        let group = byte >> 6;
        let index = (byte >> 3) & 0x07;
        let target = Target8::from_bits(byte);
        let op = match group {
            0 => CbOp::Rotate(RotOp::from_bits(index), target),
            1 => CbOp::Bit(index, target),
            2 => CbOp::Res(index, target),
            _ => CbOp::Set(index, target),
        };
        let cycles = if matches!(target, Target8::HlInd) {
            // BIT only reads the memory operand; the others write it back.
            if group == 1 {
                12
            } else {
                16
            }
        } else {
            8
        };
        t[i] = CbInstr {
            mnemonic: CB_MNEMONICS[i],
            length: 2,
            cycles,
            op,
        };
        i += 1;
    }

    t
};
