// 初始值，前8个素数平方根小数部分的前32位，用于确定压缩函数寄存器的初态
const IV: [u32; 8] = [0x6a09_e667, 0xbb67_ae85, 0x3c6e_f372, 0xa54f_f53a, 0x510e_527f, 0x9b05_688c, 0x1f83_d9ab, 0x5be0_cd19];

// 轮常量，前64个素数立方根小数部分的前32位
const K: [u32; 64] = [
    0x428a_2f98, 0x7137_4491, 0xb5c0_fbcf, 0xe9b5_dba5, 0x3956_c25b, 0x59f1_11f1, 0x923f_82a4, 0xab1c_5ed5,
    0xd807_aa98, 0x1283_5b01, 0x2431_85be, 0x550c_7dc3, 0x72be_5d74, 0x80de_b1fe, 0x9bdc_06a7, 0xc19b_f174,
    0xe49b_69c1, 0xefbe_4786, 0x0fc1_9dc6, 0x240c_a1cc, 0x2de9_2c6f, 0x4a74_84aa, 0x5cb0_a9dc, 0x76f9_88da,
    0x983e_5152, 0xa831_c66d, 0xb003_27c8, 0xbf59_7fc7, 0xc6e0_0bf3, 0xd5a7_9147, 0x06ca_6351, 0x1429_2967,
    0x27b7_0a85, 0x2e1b_2138, 0x4d2c_6dfc, 0x5338_0d13, 0x650a_7354, 0x766a_0abb, 0x81c2_c92e, 0x9272_2c85,
    0xa2bf_e8a1, 0xa81a_664b, 0xc24b_8b70, 0xc76c_51a3, 0xd192_e819, 0xd699_0624, 0xf40e_3585, 0x106a_a070,
    0x19a4_c116, 0x1e37_6c08, 0x2748_774c, 0x34b0_bcb5, 0x391c_0cb3, 0x4ed8_aa4a, 0x5b9c_ca4f, 0x682e_6ff3,
    0x748f_82ee, 0x78a5_636f, 0x84c8_7814, 0x8cc7_0208, 0x90be_fffa, 0xa450_6ceb, 0xbef9_a3f7, 0xc671_78f2,
];

fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// 压缩函数中作用于寄存器A的函数 Σ0
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

/// 压缩函数中作用于寄存器E的函数 Σ1
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// 消息扩展中的函数 σ0
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

/// 消息扩展中的函数 σ1
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// 长度为`len`字节的消息填充后的字节长度，总是64的倍数
pub fn padded_len(len: usize) -> usize {
    (len + 9).div_ceil(64) * 64
}


#[derive(Debug)]
pub struct Crypto {
    data: Vec<u8>,
    padded: bool,
    registers: [u32; 8],
}

impl Crypto {
    pub fn new(data: &[u8]) -> Self {
        let mut buf = Vec::with_capacity(padded_len(data.len()));
        buf.extend_from_slice(data);
        Crypto {
            data: buf,
            padded: false,
            registers: IV,
        }
    }

    pub fn hash(mut self) -> [u8; 32] {
        self.pad().iterate().output()
    }

    /// 填充后的消息
    pub fn padded(&mut self) -> &[u8] {
        self.pad();
        &self.data
    }

    /// 填充后的分组数
    pub fn block_count(&mut self) -> usize {
        self.pad().data.len() / 64
    }

    /// 假设消息m的长度为l 比特。首先将比特“1”添加到消息的末尾，再添加k 个“0”，
    /// k是满足l + 1 + k ≡ 448mod512 的最小的非负整数。然后再添加一个64位比特串，
    /// 该比特串是长度l的大端表示。填充后的消息m′的比特长度为512的倍数。
    ///
    /// 长度字段写满64位；当l < 2^32时高4字节为0，与只写低32位的实现结果一致。
    fn pad(&mut self) -> &mut Self {
        if self.padded {
            return self;
        }
        self.padded = true;
        // 计算原始数据的比特长度
        let l = (self.data.len() as u64).wrapping_mul(8);
        // 将'10000000'添加到数据的末尾
        self.data.push(0x80);
        // l + 8 + k = 448 mod 512
        while self.data.len() % 64 != 56 {
            self.data.push(0x00);
        }
        self.data.extend_from_slice(&l.to_be_bytes());
        self
    }

    /// 迭代压缩
    /// 0. 分组
    ///     将填充后的消息m′按512比特进行分组:m′ = B(0)B(1) · · · B(n−1)，直接在m′上切分
    /// 1. 扩展
    ///     a)将消息分组B(i)划分为16个字W0, W1, · · · , W15。
    ///     b)FOR j=16 TO 63
    ///         Wj ← Wj−16 + σ0(Wj−15) + Wj−7 + σ1(Wj−2)
    /// 2. 压缩
    ///     ABCDEFGH ← V(i)
    ///     FOR j=0 TO 63
    ///         T1 ← H + Σ1(E) + Ch(E, F, G) + Kj + Wj
    ///         T2 ← Σ0(A) + Maj(A, B, C)
    ///         H←G, G←F, F←E, E←D+T1
    ///         D←C, C←B, B←A, A←T1+T2
    ///     V(i+1) ← ABCDEFGH + V(i)
    ///
    /// 所有加法均为模2^32。
    fn iterate(&mut self) -> &mut Self {
        for b in self.data.chunks_exact(64) {
            // 扩展
            let mut w: [u32; 64] = [0; 64];
            for i in 0..16 {
                w[i] = u32::from_be_bytes([b[i * 4], b[i * 4 + 1], b[i * 4 + 2], b[i * 4 + 3]]);
            }
            for i in 16..64 {
                w[i] = w[i - 16]
                    .wrapping_add(small_sigma0(w[i - 15]))
                    .wrapping_add(w[i - 7])
                    .wrapping_add(small_sigma1(w[i - 2]));
            }

            // 压缩
            let [mut ra, mut rb, mut rc, mut rd, mut re, mut rf, mut rg, mut rh] = self.registers;
            for i in 0..64 {
                let t1 = rh
                    .wrapping_add(big_sigma1(re))
                    .wrapping_add(ch(re, rf, rg))
                    .wrapping_add(K[i])
                    .wrapping_add(w[i]);
                let t2 = big_sigma0(ra).wrapping_add(maj(ra, rb, rc));
                rh = rg;
                rg = rf;
                rf = re;
                re = rd.wrapping_add(t1);
                rd = rc;
                rc = rb;
                rb = ra;
                ra = t1.wrapping_add(t2);
            }

            // V(i+1) ← ABCDEFGH + V(i)
            for (r, v) in self.registers.iter_mut().zip([ra, rb, rc, rd, re, rf, rg, rh]) {
                *r = r.wrapping_add(v);
            }
        }
        self
    }

    /// 输出256比特的哈希值
    fn output(&self) -> [u8; 32] {
        // 大端模式：[u32; 8] -> [u8; 32]
        let mut hash: [u8; 32] = [0; 32];
        for (i, e) in self.registers.iter().enumerate() {
            hash[i * 4..(i + 1) * 4].copy_from_slice(&e.to_be_bytes());
        }
        hash
    }
}
